//! "Back to top" affordance visibility.

use crate::config::ScrollTopConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTopVisibility {
    threshold: f64,
    visible: bool,
}

impl ScrollTopVisibility {
    pub fn new(config: &ScrollTopConfig) -> Self {
        Self {
            threshold: config.threshold_px,
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Update from a scroll offset. Returns `true` when visibility flipped.
    pub fn observe(&mut self, scroll_y: f64) -> bool {
        let visible = scroll_y > self.threshold;
        let changed = visible != self.visible;
        if changed {
            tracing::debug!(scroll_y, visible, "scroll-to-top visibility changed");
        }
        self.visible = visible;
        changed
    }

    /// Inline style for the floating button. A hidden button must not
    /// capture clicks.
    pub fn button_style(&self) -> &'static str {
        button_style(self.visible)
    }
}

pub fn button_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: scale(1); pointer-events: auto;"
    } else {
        "opacity: 0; transform: scale(0.8); pointer-events: none;"
    }
}

impl Default for ScrollTopVisibility {
    fn default() -> Self {
        Self::new(&ScrollTopConfig::default())
    }
}

/// Whether a smooth scroll to the top should be requested from `scroll_y`.
///
/// Already being at the top is a no-op.
pub fn needs_scroll_to_top(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_exclusive() {
        let mut v = ScrollTopVisibility::default();
        v.observe(400.0);
        assert!(!v.visible());
        v.observe(401.0);
        assert!(v.visible());
    }

    #[test]
    fn reports_only_flips() {
        let mut v = ScrollTopVisibility::default();
        assert!(!v.observe(10.0));
        assert!(v.observe(500.0));
        assert!(!v.observe(900.0));
        assert!(v.observe(0.0));
    }

    #[test]
    fn hidden_button_ignores_pointer() {
        let mut v = ScrollTopVisibility::default();
        assert!(v.button_style().contains("pointer-events: none"));
        v.observe(1000.0);
        assert!(v.button_style().contains("pointer-events: auto"));
    }

    #[test]
    fn no_scroll_request_at_top() {
        assert!(!needs_scroll_to_top(0.0));
        assert!(!needs_scroll_to_top(-3.0));
        assert!(needs_scroll_to_top(1.0));
    }
}
