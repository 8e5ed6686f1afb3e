//! Tunable constants for the landing page.
//!
//! Every field has a default, so an empty TOML document yields
//! [`LandingConfig::default`]. The browser crate embeds `landing.toml` and
//! parses it once at start-up.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::spring::SpringConfig;

/// Root configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    pub scroll: ScrollConfig,
    pub pointer: PointerConfig,
    pub scroll_top: ScrollTopConfig,
    pub qr: QrConfig,
}

/// Progress spring and hero transform settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
    /// Hero background offset at `hero_fade_end`, in percent of its height.
    pub hero_offset_max_percent: f64,
    /// Raw progress at which the hero is fully faded and fully offset.
    pub hero_fade_end: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
            hero_offset_max_percent: 30.0,
            hero_fade_end: 0.5,
        }
    }
}

impl ScrollConfig {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig {
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
            rest_delta: self.rest_delta,
            rest_speed: self.rest_speed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    /// Full span of the offset range; offsets lie in `[-amplitude/2, amplitude/2]`.
    pub amplitude: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { amplitude: 40.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollTopConfig {
    pub threshold_px: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self {
            threshold_px: 400.0,
        }
    }
}

/// Parameters of the QR code image request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QrConfig {
    pub size: u32,
    pub margin: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: 300,
            margin: 10,
        }
    }
}

impl LandingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(bool, &'static str, &'static str); 9] = [
            (
                self.scroll.stiffness > 0.0,
                "scroll.stiffness",
                "must be positive",
            ),
            (self.scroll.mass > 0.0, "scroll.mass", "must be positive"),
            (
                self.scroll.damping >= 0.0,
                "scroll.damping",
                "must not be negative",
            ),
            (
                self.scroll.rest_delta > 0.0,
                "scroll.rest_delta",
                "must be positive",
            ),
            (
                self.scroll.rest_speed > 0.0,
                "scroll.rest_speed",
                "must be positive",
            ),
            (
                self.scroll.hero_fade_end > 0.0 && self.scroll.hero_fade_end <= 1.0,
                "scroll.hero_fade_end",
                "must be in (0, 1]",
            ),
            (
                self.pointer.amplitude.is_finite(),
                "pointer.amplitude",
                "must be finite",
            ),
            (
                self.scroll_top.threshold_px >= 0.0,
                "scroll_top.threshold_px",
                "must not be negative",
            ),
            (self.qr.size > 0, "qr.size", "must be positive"),
        ];

        match checks.iter().find(|(ok, _, _)| !ok) {
            Some(&(_, field, reason)) => Err(ConfigError::Invalid { field, reason }),
            None => Ok(()),
        }
    }
}
