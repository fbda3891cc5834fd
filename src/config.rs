//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/yanta/config.json`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Preferences that persist across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Wrap long lines at word (or character) boundaries
    #[serde(default, alias = "WordWrap")]
    pub word_wrap: bool,
    /// User stylesheet applied over the default theme; empty means none
    #[serde(default, alias = "CustomCssPath")]
    pub custom_css_path: String,
}

impl AppConfig {
    /// Load config from the per-user location, or defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the per-user location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Custom stylesheet, if one is configured
    pub fn stylesheet(&self) -> Option<PathBuf> {
        if self.custom_css_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.custom_css_path))
        }
    }

    /// Forget the custom stylesheet so the default theme is used
    pub fn clear_stylesheet(&mut self) {
        self.custom_css_path.clear();
    }
}
