//! Page-lifetime state: the event-driven controllers and their subscriptions.
//!
//! Each controller subscribes on its own; none depends on another. Platform
//! listeners that feed the hubs are attached to the page so that a single
//! unmount releases everything.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::LandingConfig;
use crate::events::{EventHub, Subscription};
use crate::pointer::{PointerSample, PointerTracker};
use crate::scroll::{ScrollMetrics, ScrollProgressController};
use crate::visibility::ScrollTopVisibility;

/// Transient UI state owned by a mounted page.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingState {
    pub progress: ScrollProgressController,
    pub pointer: PointerTracker,
    pub scroll_top: ScrollTopVisibility,
    revision: u64,
}

impl LandingState {
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            progress: ScrollProgressController::new(&config.scroll),
            pointer: PointerTracker::new(&config.pointer),
            scroll_top: ScrollTopVisibility::new(&config.scroll_top),
            revision: 0,
        }
    }

    /// Number of state mutations since mount.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Advance the progress spring by `dt` seconds. Returns the smoothed value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let value = self.progress.tick(dt);
        self.touch();
        value
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

pub struct MountedPage {
    state: Rc<RefCell<LandingState>>,
    subscriptions: Vec<Subscription>,
}

impl MountedPage {
    pub fn mount(
        config: &LandingConfig,
        scroll: &EventHub<ScrollMetrics>,
        pointer: &EventHub<PointerSample>,
    ) -> Self {
        let state = Rc::new(RefCell::new(LandingState::new(config)));

        let progress = {
            let state = Rc::clone(&state);
            scroll.subscribe(move |metrics: &ScrollMetrics| {
                let mut state = state.borrow_mut();
                state.progress.observe(*metrics);
                state.touch();
            })
        };
        let scroll_top = {
            let state = Rc::clone(&state);
            scroll.subscribe(move |metrics: &ScrollMetrics| {
                let mut state = state.borrow_mut();
                state.scroll_top.observe(metrics.scroll_y);
                state.touch();
            })
        };
        let tracker = {
            let state = Rc::clone(&state);
            pointer.subscribe(move |sample: &PointerSample| {
                let mut state = state.borrow_mut();
                state.pointer.observe(*sample);
                state.touch();
            })
        };

        Self {
            state,
            subscriptions: vec![progress, scroll_top, tracker],
        }
    }

    pub fn snapshot(&self) -> LandingState {
        self.state.borrow().clone()
    }

    /// Shared handle to the state, usable after unmount.
    pub fn state(&self) -> Rc<RefCell<LandingState>> {
        Rc::clone(&self.state)
    }

    /// Advance the progress spring by one frame. Returns the smoothed value.
    pub fn tick(&self, dt: f64) -> f64 {
        self.state.borrow_mut().tick(dt)
    }

    /// Tie extra subscriptions (e.g. the listeners feeding the hubs) to the
    /// page's lifetime.
    pub fn attach(&mut self, subscriptions: impl IntoIterator<Item = Subscription>) {
        self.subscriptions.extend(subscriptions);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Release every subscription. Returns the final state.
    pub fn unmount(mut self) -> LandingState {
        self.subscriptions.clear();
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_subscribes_each_controller_separately() {
        let scroll = EventHub::new();
        let pointer = EventHub::new();
        let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer);

        assert_eq!(page.subscription_count(), 3);
        assert_eq!(scroll.subscriber_count(), 2);
        assert_eq!(pointer.subscriber_count(), 1);
    }

    #[test]
    fn attached_subscriptions_are_released_with_the_page() {
        use std::cell::Cell;

        let scroll = EventHub::new();
        let pointer = EventHub::new();
        let released = Rc::new(Cell::new(0));
        let mut page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer);
        page.attach((0..2).map(|_| {
            let released = Rc::clone(&released);
            Subscription::from_release(move || released.set(released.get() + 1))
        }));

        assert_eq!(page.subscription_count(), 5);
        assert_eq!(released.get(), 0);

        let weak = Rc::downgrade(&page.state());
        page.unmount();
        assert_eq!(released.get(), 2);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn unmount_releases_listeners() {
        let scroll = EventHub::new();
        let pointer = EventHub::new();
        let page = MountedPage::mount(&LandingConfig::default(), &scroll, &pointer);

        page.unmount();

        assert_eq!(scroll.subscriber_count(), 0);
        assert_eq!(pointer.subscriber_count(), 0);
    }
}
