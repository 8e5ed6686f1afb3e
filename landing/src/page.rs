// Page composition and the window wiring behind it
// Developed with ❤️ for Sri Lankan farmers (c)2026 Agri Tamizha

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tamizha_core::{
    EventHub, HeroTransform, LandingConfig, LandingState, MountedPage, PointerOffset,
    PointerSample, ScrollMetrics,
};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config::use_config;
use crate::sections::{
    About, Community, Features, FloatingLeaves, FloatingWhatsApp, Footer, Hero, Nav, ProgressBar,
    ScrollTopButton,
};
use crate::web;

/// Signals the sections read. Written only from [`MountedPage`] state.
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub smooth_progress: RwSignal<f64>,
    pub hero: RwSignal<HeroTransform>,
    pub scroll_top_visible: RwSignal<bool>,
    pub pointer: RwSignal<PointerOffset>,
    spring_running: StoredValue<bool>,
}

impl PageSignals {
    pub fn new() -> Self {
        Self {
            smooth_progress: RwSignal::new(0.0),
            hero: RwSignal::new(HeroTransform::default()),
            scroll_top_visible: RwSignal::new(false),
            pointer: RwSignal::new(PointerOffset::default()),
            spring_running: StoredValue::new(false),
        }
    }
}

impl Default for PageSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Mount the page state, feed it from `window` scroll and mousemove events
/// and mirror it into `signals`.
///
/// Dropping (or unmounting) the returned page removes the window listeners
/// along with the controller subscriptions.
pub fn mount_window_page(config: &LandingConfig, signals: PageSignals) -> MountedPage {
    let scroll_hub = EventHub::<ScrollMetrics>::new();
    let pointer_hub = EventHub::<PointerSample>::new();
    let mut page = MountedPage::mount(config, &scroll_hub, &pointer_hub);

    let scroll_changed: Rc<dyn Fn()> = {
        let state = page.state();
        Rc::new(move || {
            let Some(metrics) = web::scroll_metrics() else {
                return;
            };
            scroll_hub.emit(&metrics);
            publish_scroll(&state, signals);
        })
    };

    let pointer_changed = {
        let state = page.state();
        move |event: web_sys::Event| {
            let Some(sample) = event
                .dyn_ref::<MouseEvent>()
                .and_then(web::pointer_sample)
            else {
                return;
            };
            pointer_hub.emit(&sample);
            signals.pointer.set(state.borrow().pointer.offset());
        }
    };

    scroll_changed();
    let listeners = [
        web::listen_window("scroll", true, {
            let scroll_changed = Rc::clone(&scroll_changed);
            move |_| scroll_changed()
        }),
        web::listen_window("mousemove", true, pointer_changed),
    ];
    page.attach(listeners.into_iter().flatten());
    tracing::debug!(
        subscriptions = page.subscription_count(),
        "landing page mounted"
    );
    page
}

fn publish_scroll(state: &Rc<RefCell<LandingState>>, signals: PageSignals) {
    let (hero, visible) = {
        let state = state.borrow();
        (state.progress.hero(), state.scroll_top.visible())
    };
    signals.hero.set(hero);
    if signals.scroll_top_visible.get_untracked() != visible {
        signals.scroll_top_visible.set(visible);
    }
    if !signals.spring_running.get_value() {
        signals.spring_running.set_value(true);
        animate_spring(Rc::downgrade(state), signals, js_sys::Date::now());
    }
}

/// Step the progress spring once per animation frame until it settles or
/// the page is gone.
fn animate_spring(state: Weak<RefCell<LandingState>>, signals: PageSignals, last_frame_ms: f64) {
    request_animation_frame(move || {
        let Some(live) = state.upgrade() else {
            return;
        };
        let now = js_sys::Date::now();
        let dt = (now - last_frame_ms).max(0.0) / 1000.0;
        let (value, animating) = {
            let mut live = live.borrow_mut();
            (live.tick(dt), live.progress.is_animating())
        };
        drop(live);

        signals.smooth_progress.set(value);
        if animating {
            animate_spring(state, signals, now);
        } else {
            signals.spring_running.set_value(false);
        }
    });
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let signals = PageSignals::new();
    provide_context(signals.pointer.read_only());

    let page = SendWrapper::new(mount_window_page(&use_config(), signals));
    on_cleanup(move || {
        let last = page.take().unmount();
        tracing::debug!(revision = last.revision(), "landing page unmounted");
    });

    view! {
        <div class="page">
            <ProgressBar progress=signals.smooth_progress.read_only() />
            <FloatingLeaves />
            <Nav />
            <Hero hero=signals.hero.read_only() />
            <main>
                <About />
                <Features />
                <Community />
            </main>
            <Footer />
            <FloatingWhatsApp />
            <ScrollTopButton visible=signals.scroll_top_visible.read_only() />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Event, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mouse_at(client_x: i32, client_y: i32) -> MouseEvent {
        let init = MouseEventInit::new();
        init.set_client_x(client_x);
        init.set_client_y(client_y);
        MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).expect("mouse event")
    }

    #[wasm_bindgen_test]
    fn window_events_drive_the_mounted_page() {
        Owner::new().with(|| {
            let signals = PageSignals::new();
            let page = mount_window_page(&LandingConfig::default(), signals);
            let window = web_sys::window().expect("window");

            // Initial scroll sample: one touch per scroll subscriber.
            assert_eq!(page.snapshot().revision(), 2);
            assert_eq!(page.subscription_count(), 5);

            window.dispatch_event(&mouse_at(0, 0)).expect("dispatch");
            assert_eq!(page.snapshot().revision(), 3);
            assert_eq!(signals.pointer.get_untracked(), page.snapshot().pointer.offset());
            assert!(signals.pointer.get_untracked().x < 0.0);
        });
    }

    #[wasm_bindgen_test]
    fn unmount_detaches_window_listeners() {
        Owner::new().with(|| {
            let signals = PageSignals::new();
            let page = mount_window_page(&LandingConfig::default(), signals);
            let handle = page.state();
            let window = web_sys::window().expect("window");

            window.dispatch_event(&mouse_at(0, 0)).expect("dispatch");
            let pointer_before = signals.pointer.get_untracked();
            let last = page.unmount();

            let width = window.inner_width().expect("width").as_f64().expect("number") as i32;
            window.dispatch_event(&mouse_at(width, width)).expect("dispatch");
            window
                .dispatch_event(&Event::new("scroll").expect("scroll event"))
                .expect("dispatch");

            assert_eq!(handle.borrow().revision(), last.revision());
            assert_eq!(*handle.borrow(), last);
            assert_eq!(signals.pointer.get_untracked(), pointer_before);
        });
    }
}
