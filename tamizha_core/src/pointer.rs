//! Pointer position mapped to a centred offset.
//!
//! The offset is kept as page state for decorative parallax; no element of
//! the current page reads it.

use crate::config::PointerConfig;

/// Raw pointer-move notification, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    amplitude: f64,
    offset: PointerOffset,
}

impl PointerTracker {
    pub fn new(config: &PointerConfig) -> Self {
        Self {
            amplitude: config.amplitude,
            offset: PointerOffset::default(),
        }
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    /// Store the offset for `sample` and return it.
    pub fn observe(&mut self, sample: PointerSample) -> PointerOffset {
        self.offset = PointerOffset {
            x: self.axis(sample.client_x, sample.viewport_width),
            y: self.axis(sample.client_y, sample.viewport_height),
        };
        self.offset
    }

    fn axis(&self, position: f64, extent: f64) -> f64 {
        if !(extent > 0.0) || !position.is_finite() {
            return 0.0;
        }
        (position / extent - 0.5) * self.amplitude
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(&PointerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample {
            client_x: x,
            client_y: y,
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }

    #[test]
    fn centre_is_zero() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.observe(sample(640.0, 360.0)),
            PointerOffset { x: 0.0, y: 0.0 }
        );
    }

    #[test]
    fn corners_hit_the_range_limits() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.observe(sample(0.0, 0.0)),
            PointerOffset { x: -20.0, y: -20.0 }
        );
        assert_eq!(
            tracker.observe(sample(1280.0, 720.0)),
            PointerOffset { x: 20.0, y: 20.0 }
        );
    }

    #[test]
    fn latest_event_wins() {
        let mut tracker = PointerTracker::default();
        tracker.observe(sample(0.0, 0.0));
        tracker.observe(sample(960.0, 180.0));
        assert_eq!(tracker.offset(), PointerOffset { x: 10.0, y: -10.0 });
    }

    #[test]
    fn zero_viewport_axis_yields_zero() {
        let mut tracker = PointerTracker::default();
        let offset = tracker.observe(PointerSample {
            client_x: 10.0,
            client_y: 10.0,
            viewport_width: 0.0,
            viewport_height: 720.0,
        });
        assert_eq!(offset.x, 0.0);
        assert!(offset.y.is_finite());
    }

    #[test]
    fn amplitude_is_configurable() {
        let mut tracker = PointerTracker::new(&PointerConfig { amplitude: 100.0 });
        assert_eq!(tracker.observe(sample(0.0, 720.0)), PointerOffset { x: -50.0, y: 50.0 });
    }
}
