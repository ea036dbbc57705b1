use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

use super::theme::ThemePreference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Key the theme preference is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Preference used when nothing (valid) is stored yet
    #[serde(default = "default_theme")]
    pub default_theme: ThemePreference,

    /// Ask the host for the OS theme instead of probing it directly
    #[serde(default = "default_host_bridge")]
    pub host_bridge: bool,

    /// How often the OS theme watcher polls, in milliseconds
    #[serde(default = "default_watch_interval_ms")]
    pub watch_interval_ms: u64,
}

fn default_storage_key() -> String {
    "vite-ui-theme".to_string()
}

fn default_theme() -> ThemePreference {
    ThemePreference::System
}

fn default_host_bridge() -> bool {
    true
}

fn default_watch_interval_ms() -> u64 {
    1000
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_theme: default_theme(),
            host_bridge: default_host_bridge(),
            watch_interval_ms: default_watch_interval_ms(),
        }
    }
}

impl ShellConfig {
    /// Load config from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to parse config {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(path) {
                    log::debug!("Could not write default config: {}", e);
                }
                default
            }
        }
    }

    /// Save config to disk
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("lumenshell");
        path.push("config.json");
        path
    }

    pub fn watch_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.watch_interval_ms.max(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.storage_key, "vite-ui-theme");
        assert_eq!(config.default_theme, ThemePreference::System);
        assert!(config.host_bridge);
        assert_eq!(config.watch_interval_ms, 1000);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"default_theme": "dark"}"#;
        let config: ShellConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_theme, ThemePreference::Dark);
        assert_eq!(config.storage_key, "vite-ui-theme");
        assert!(config.host_bridge);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = ShellConfig {
            storage_key: "my-theme".to_string(),
            host_bridge: false,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(ShellConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ShellConfig::load_from(&path);
        assert_eq!(config, ShellConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ShellConfig::load_from(&path), ShellConfig::default());
    }

    #[test]
    fn test_watch_interval_has_floor() {
        let config = ShellConfig {
            watch_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.watch_interval().as_millis(), 50);
    }
}
