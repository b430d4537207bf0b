//! Configuration types
//!
//! Defines `Settings` and its sub-types. Every field has a default so a
//! missing or partial config file always yields a usable value.

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// Display settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How icons are rendered
    #[serde(default)]
    pub icon_mode: IconMode,

    /// Lines scrolled per keypress
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icon_mode: IconMode::default(),
            scroll_step: default_scroll_step(),
        }
    }
}

fn default_scroll_step() -> usize {
    1
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Unicode glyphs (requires a terminal font that covers them)
    #[default]
    Unicode,
    /// Plain ASCII fallbacks, safe everywhere
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}
