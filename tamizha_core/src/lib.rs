//! Platform-independent logic behind the Agri Tamizha landing page.
//!
//! The page itself is presentational. What lives here is the small amount of
//! state it derives from the browser:
//!
//! - [`scroll::ScrollProgressController`]: raw and spring-smoothed scroll
//!   progress plus the hero parallax/fade transforms.
//! - [`pointer::PointerTracker`]: pointer position mapped to a centred offset.
//! - [`visibility::ScrollTopVisibility`]: the "back to top" threshold flag.
//! - [`share::share`]: native share sheet with a clipboard fallback.
//!
//! Everything is single-threaded and event driven. [`page::MountedPage`] wires
//! the three event-driven controllers onto [`events::EventHub`]s so the whole
//! mount/unmount lifecycle can be exercised without a browser.
//!
//! Developed with ❤️ for Sri Lankan farmers (c)2026 Agri Tamizha

pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod interpolate;
pub mod motion;
pub mod page;
pub mod pointer;
pub mod scroll;
pub mod share;
pub mod spring;
pub mod visibility;

pub use config::LandingConfig;
pub use error::{ConfigError, ShareError};
pub use events::{EventHub, Subscription};
pub use page::{LandingState, MountedPage};
pub use pointer::{PointerOffset, PointerSample, PointerTracker};
pub use scroll::{HeroTransform, ScrollMetrics, ScrollProgressController};
pub use share::{SharePlatform, ShareOutcome, ShareTarget, share};
pub use spring::{SpringConfig, SpringFollower};
pub use visibility::ScrollTopVisibility;
