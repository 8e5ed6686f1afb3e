//! Scroll progress and the hero banner transforms derived from it.

use crate::config::ScrollConfig;
use crate::interpolate::Keyframes;
use crate::spring::SpringFollower;

/// One scroll notification's worth of viewport geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    /// Largest reachable scroll offset; zero when the document fits.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Fraction of the document scrolled, clamped to `[0, 1]`.
    ///
    /// A document no taller than the viewport has progress 0.
    pub fn raw_progress(&self) -> f64 {
        let max = self.max_scroll();
        if !(max > 0.0) || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / max).clamp(0.0, 1.0)
    }
}

/// Parallax offset and fade applied to the hero banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    /// Background offset in percent of the hero height.
    pub vertical_offset_percent: f64,
    pub opacity: f64,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self {
            vertical_offset_percent: 0.0,
            opacity: 1.0,
        }
    }
}

impl HeroTransform {
    /// Inline style for the parallax background layer.
    pub fn background_style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.3}%, 0);",
            self.vertical_offset_percent
        )
    }

    /// Inline style for the fading foreground content.
    pub fn content_style(&self) -> String {
        format!("opacity: {:.3};", self.opacity)
    }
}

/// Derives every scroll-driven value of the page.
///
/// `observe` takes raw geometry and updates the unsmoothed outputs at once;
/// `tick` advances the progress spring by one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProgressController {
    raw: f64,
    spring: SpringFollower,
    offset_curve: Keyframes,
    opacity_curve: Keyframes,
}

impl ScrollProgressController {
    pub fn new(config: &ScrollConfig) -> Self {
        let fade_end = config.hero_fade_end;
        Self {
            raw: 0.0,
            spring: SpringFollower::new(config.spring(), 0.0),
            offset_curve: Keyframes::sorted(vec![
                (0.0, 0.0),
                (fade_end, config.hero_offset_max_percent),
            ]),
            opacity_curve: Keyframes::sorted(vec![
                (0.0, 1.0),
                (fade_end * 0.6, 0.7),
                (fade_end, 0.0),
            ]),
        }
    }

    /// Feed a scroll notification. Returns the new raw progress.
    pub fn observe(&mut self, metrics: ScrollMetrics) -> f64 {
        self.raw = metrics.raw_progress();
        self.spring.set_target(self.raw);
        self.raw
    }

    /// Advance the smoothing spring by `dt` seconds; returns the smoothed value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.spring.step(dt)
    }

    pub fn raw_progress(&self) -> f64 {
        self.raw
    }

    pub fn smooth_progress(&self) -> f64 {
        self.spring.value()
    }

    /// Whether the progress bar still needs animation frames.
    pub fn is_animating(&self) -> bool {
        !self.spring.is_at_rest()
    }

    pub fn hero(&self) -> HeroTransform {
        self.hero_at(self.raw)
    }

    pub fn hero_at(&self, raw_progress: f64) -> HeroTransform {
        HeroTransform {
            vertical_offset_percent: self.offset_curve.sample(raw_progress),
            opacity: self.opacity_curve.sample(raw_progress),
        }
    }

    /// Inline style for the top progress bar.
    pub fn progress_bar_style(&self) -> String {
        progress_bar_style(self.smooth_progress())
    }
}

/// Progress bar scaled horizontally from its left edge.
pub fn progress_bar_style(progress: f64) -> String {
    format!("transform: scaleX({:.4});", progress.clamp(0.0, 1.0))
}

impl Default for ScrollProgressController {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn raw_progress_spans_zero_to_one() {
        let max = 3000.0 - 800.0;
        assert_eq!(ScrollMetrics::new(0.0, 3000.0, 800.0).raw_progress(), 0.0);
        assert_eq!(ScrollMetrics::new(max, 3000.0, 800.0).raw_progress(), 1.0);
        assert!(approx(
            ScrollMetrics::new(max / 4.0, 3000.0, 800.0).raw_progress(),
            0.25
        ));
    }

    #[test]
    fn raw_progress_is_monotonic_and_bounded() {
        let mut previous = 0.0;
        for step in 0..=220 {
            let p = ScrollMetrics::new(step as f64 * 10.0, 3000.0, 800.0).raw_progress();
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= previous);
            previous = p;
        }
    }

    #[test]
    fn raw_progress_clamps_overscroll() {
        assert_eq!(ScrollMetrics::new(-50.0, 3000.0, 800.0).raw_progress(), 0.0);
        assert_eq!(ScrollMetrics::new(9000.0, 3000.0, 800.0).raw_progress(), 1.0);
    }

    #[test]
    fn short_document_has_zero_progress() {
        assert_eq!(ScrollMetrics::new(0.0, 800.0, 800.0).raw_progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, 600.0, 800.0).raw_progress(), 0.0);
        assert_eq!(ScrollMetrics::new(f64::NAN, 3000.0, 800.0).raw_progress(), 0.0);
    }

    #[test]
    fn hero_opacity_control_points() {
        let c = ScrollProgressController::default();
        assert!(approx(c.hero_at(0.0).opacity, 1.0));
        assert!(approx(c.hero_at(0.3).opacity, 0.7));
        assert!(approx(c.hero_at(0.5).opacity, 0.0));
        assert!(approx(c.hero_at(0.9).opacity, 0.0));
    }

    #[test]
    fn hero_opacity_never_increases_before_half() {
        let c = ScrollProgressController::default();
        let mut previous = f64::INFINITY;
        for step in 0..=50 {
            let opacity = c.hero_at(step as f64 / 100.0).opacity;
            assert!(opacity <= previous);
            previous = opacity;
        }
    }

    #[test]
    fn hero_offset_is_linear_up_to_half() {
        let c = ScrollProgressController::default();
        assert!(approx(c.hero_at(0.0).vertical_offset_percent, 0.0));
        assert!(approx(c.hero_at(0.25).vertical_offset_percent, 15.0));
        assert!(approx(c.hero_at(0.5).vertical_offset_percent, 30.0));
        assert!(approx(c.hero_at(1.0).vertical_offset_percent, 30.0));
    }

    #[test]
    fn observe_updates_raw_and_wakes_spring() {
        let mut c = ScrollProgressController::default();
        assert!(!c.is_animating());

        let raw = c.observe(ScrollMetrics::new(1100.0, 3000.0, 800.0));
        assert!(approx(raw, 0.5));
        assert!(c.is_animating());
        assert_eq!(c.smooth_progress(), 0.0);
        assert!(approx(c.hero().opacity, 0.0));
    }

    #[test]
    fn smooth_progress_catches_up() {
        let mut c = ScrollProgressController::default();
        c.observe(ScrollMetrics::new(2200.0, 3000.0, 800.0));
        for _ in 0..240 {
            c.tick(1.0 / 60.0);
        }
        assert!(!c.is_animating());
        assert_eq!(c.smooth_progress(), 1.0);
        assert_eq!(c.progress_bar_style(), "transform: scaleX(1.0000);");
    }

    #[test]
    fn styles_render_transforms() {
        let hero = HeroTransform {
            vertical_offset_percent: 12.5,
            opacity: 0.75,
        };
        assert_eq!(hero.background_style(), "transform: translate3d(0, 12.500%, 0);");
        assert_eq!(hero.content_style(), "opacity: 0.750;");
    }
}
