use pretty_assertions::assert_eq;
use tamizha_core::{
    EventHub, LandingConfig, MountedPage, PointerOffset, PointerSample, ScrollMetrics,
};

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics::new(scroll_y, 4000.0, 1000.0)
}

fn pointer(x: f64, y: f64) -> PointerSample {
    PointerSample {
        client_x: x,
        client_y: y,
        viewport_width: 1000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn scroll_updates_progress_hero_and_scroll_top() {
    let scroll = EventHub::new();
    let pointer_hub = EventHub::new();
    let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer_hub);

    scroll.emit(&metrics(750.0));
    let state = page.snapshot();
    assert_eq!(state.progress.raw_progress(), 0.25);
    assert_eq!(state.progress.hero().vertical_offset_percent, 15.0);
    assert!(state.scroll_top.visible());

    scroll.emit(&metrics(400.0));
    assert!(!page.snapshot().scroll_top.visible());
}

#[test]
fn pointer_events_store_offset() {
    let scroll = EventHub::new();
    let pointer_hub = EventHub::new();
    let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer_hub);

    pointer_hub.emit(&pointer(1000.0, 0.0));
    assert_eq!(page.snapshot().pointer.offset(), PointerOffset { x: 20.0, y: -20.0 });
}

#[test]
fn notifications_after_unmount_do_not_mutate_state() {
    let scroll = EventHub::new();
    let pointer_hub = EventHub::new();
    let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer_hub);
    let handle = page.state();

    scroll.emit(&metrics(1200.0));
    pointer_hub.emit(&pointer(10.0, 10.0));
    let before = page.unmount();
    assert_eq!(before.revision(), 3);

    scroll.emit(&metrics(3000.0));
    scroll.emit(&metrics(0.0));
    pointer_hub.emit(&pointer(900.0, 900.0));

    let after = handle.borrow().clone();
    assert_eq!(after.revision(), before.revision());
    assert_eq!(after, before);
}

#[test]
fn dropping_the_page_also_unsubscribes() {
    let scroll = EventHub::new();
    let pointer_hub = EventHub::new();
    let handle = {
        let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer_hub);
        page.state()
    };

    scroll.emit(&metrics(2000.0));
    assert_eq!(handle.borrow().revision(), 0);
    assert_eq!(scroll.subscriber_count(), 0);
}

#[test]
fn progress_bar_settles_after_scroll() {
    let scroll = EventHub::new();
    let pointer_hub = EventHub::new();
    let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer_hub);

    scroll.emit(&metrics(3000.0));
    let mut last = 0.0;
    for _ in 0..300 {
        let value = page.tick(1.0 / 60.0);
        assert!(value >= last);
        last = value;
    }
    assert_eq!(last, 1.0);
    assert!(!page.snapshot().progress.is_animating());
}

#[test]
fn custom_threshold_from_toml() {
    let config = LandingConfig::from_toml_str("[scroll_top]\nthreshold_px = 100.0\n").unwrap();
    let scroll = EventHub::new();
    let pointer_hub = EventHub::new();
    let page = MountedPage::mount(&config, &scroll, &pointer_hub);

    scroll.emit(&metrics(150.0));
    assert!(page.snapshot().scroll_top.visible());
}
