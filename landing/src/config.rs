use leptos::prelude::*;
use tamizha_core::LandingConfig;

const EMBEDDED: &str = include_str!("../landing.toml");

/// Parse the embedded `landing.toml`, falling back to built-in defaults.
pub fn load() -> LandingConfig {
    match LandingConfig::from_toml_str(EMBEDDED) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "using default landing config");
            LandingConfig::default()
        }
    }
}

/// The config provided at the root, or defaults outside the app tree.
pub fn use_config() -> LandingConfig {
    use_context::<LandingConfig>().unwrap_or_default()
}
