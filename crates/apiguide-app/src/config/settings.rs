//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use apiguide_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "apiguide";

/// Default location: `<config_dir>/apiguide/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults.
///
/// A missing file is normal; an unreadable or malformed one is logged and
/// ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Resolve settings from an explicit path or the default location.
///
/// Either way a missing or malformed file falls back to defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> Settings {
    match explicit {
        Some(path) => {
            if !path.exists() {
                warn!("Config file {:?} does not exist, using defaults", path);
            }
            load_settings(path)
        }
        None => default_settings_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiguide_core::Section;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[labs\nrest_delay_ms = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[behavior]\nstart_section = \"status\"\n[labs]\nrest_delay_ms = 10\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.behavior.start_section, Section::Status);
        assert_eq!(settings.labs.rest_delay_ms, 10);
    }

    #[test]
    fn test_explicit_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let settings = resolve_settings(Some(&dir.path().join("missing.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nicons = ").unwrap();
        assert_eq!(resolve_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_resolve_with_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[ui]\nshow_progress = false\n").unwrap();
        let settings = resolve_settings(Some(&path));
        assert!(!settings.ui.show_progress);
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = default_settings_path() {
            assert!(path.ends_with("apiguide/config.toml"));
        }
    }
}
