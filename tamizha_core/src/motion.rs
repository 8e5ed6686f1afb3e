//! Enter animations as inline CSS.
//!
//! An element starts in its hidden style and switches to its visible style
//! once it scrolls into view; the transition does the rest.

/// Timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Out,
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    /// Fast start, long settle. Used by the fade-up reveals and the headline.
    pub const SMOOTH_OUT: Ease = Ease::CubicBezier(0.22, 1.0, 0.36, 1.0);

    pub fn css(&self) -> String {
        match self {
            Ease::Out => "ease-out".to_string(),
            Ease::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reveal {
    /// Rise 40px while fading in.
    FadeUp,
    /// Grow from 90% while fading in.
    ScaleIn,
    /// Slide horizontally from `from_x` pixels while fading in.
    SlideIn { from_x: f64 },
    /// Rise `from_y` pixels while fading in, with a custom duration.
    Rise { from_y: f64, duration: f64 },
}

impl Reveal {
    pub fn duration(&self) -> f64 {
        match self {
            Reveal::FadeUp => 0.6,
            Reveal::ScaleIn => 0.5,
            Reveal::SlideIn { .. } => 0.6,
            Reveal::Rise { duration, .. } => *duration,
        }
    }

    pub fn ease(&self) -> Ease {
        match self {
            Reveal::FadeUp | Reveal::Rise { .. } => Ease::SMOOTH_OUT,
            Reveal::ScaleIn | Reveal::SlideIn { .. } => Ease::Out,
        }
    }

    fn hidden_transform(&self) -> String {
        match self {
            Reveal::FadeUp => "translateY(40px)".to_string(),
            Reveal::ScaleIn => "scale(0.9)".to_string(),
            Reveal::SlideIn { from_x } => format!("translateX({from_x}px)"),
            Reveal::Rise { from_y, .. } => format!("translateY({from_y}px)"),
        }
    }

    /// Full inline style for the element, `delay` in seconds.
    pub fn style(&self, revealed: bool, delay: f64) -> String {
        let (opacity, transform) = if revealed {
            ("1", "none".to_string())
        } else {
            ("0", self.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
            d = self.duration(),
            e = self.ease().css(),
        )
    }
}

/// Staggered start times for the children of a revealed container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub const SECTION: Stagger = Stagger {
        delay_children: 0.2,
        stagger_children: 0.15,
    };

    /// Start delay of the `index`-th child, in seconds.
    pub fn delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}
