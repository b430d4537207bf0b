//! Settings parser for ~/.config/phi-primer/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use crate::common::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "phi-primer";

/// The per-user config directory, if the platform defines one
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_CONFIG_DIR))
}

/// Load settings from the user config directory
///
/// Returns default settings if the platform has no config directory or
/// the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match config_dir() {
        Some(dir) => load_settings_from(&dir.join(CONFIG_FILENAME)),
        None => {
            debug!("No user config directory, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config file under `dir`, returning its path
///
/// An existing config file is left untouched.
pub fn init_config_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# phi-primer configuration

[ui]
icon_mode = "unicode"   # "unicode" or "ascii"
scroll_step = 1
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("config.toml"));

        assert_eq!(settings.ui.icon_mode, IconMode::Unicode);
        assert_eq!(settings.ui.scroll_step, 1);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let config = r#"
[ui]
icon_mode = "ascii"
scroll_step = 5
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings_from(&path);

        assert_eq!(settings.ui.icon_mode, IconMode::Ascii);
        assert_eq!(settings.ui.scroll_step, 5);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        std::fs::write(&path, "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings_from(&path);
        assert_eq!(settings.ui.icon_mode, IconMode::Unicode);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("phi-primer");

        let path = init_config_dir(&dir).unwrap();

        assert!(path.exists());

        // Content should be valid TOML matching the defaults
        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings =
            toml::from_str(&content).expect("default config should be valid TOML");
        assert_eq!(settings.ui.icon_mode, IconMode::Unicode);
        assert_eq!(settings.ui.scroll_step, 1);
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();
        let dir = temp.path().to_path_buf();

        // First init
        init_config_dir(&dir).unwrap();

        // Modify the file
        let config_path = dir.join("config.toml");
        std::fs::write(&config_path, "[ui]\nicon_mode = \"ascii\"\n").unwrap();

        // Second init should not overwrite
        init_config_dir(&dir).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("ascii"));
    }
}
