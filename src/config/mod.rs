//! Configuration file parsing
//!
//! Supports `~/.config/phi-primer/config.toml` for display settings.

pub mod settings;
pub mod types;

pub use settings::{config_dir, init_config_dir, load_settings, load_settings_from};
pub use types::*;
