//! Settings module - shell preferences storage
//!
//! Stored as a JSON config file in the platform config directory. These
//! are launcher preferences only (where the data lives, which language to
//! start in); nothing about the browsing session itself is persisted.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use curio_catalog::Language;

const CONFIG_FILE_NAME: &str = "settings.json";
const APP_NAME: &str = "curio-catalog";

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Directory holding the `language/` data tree
    pub data_dir: PathBuf,
    /// Language active when the window opens
    pub startup_language: Language,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            startup_language: Language::Zh,
        }
    }
}

impl AppSettings {
    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from the config file, falling back to defaults for
    /// anything missing or unreadable.
    pub fn load() -> Self {
        let mut settings = Self::default();

        if let Some(config_path) = Self::config_file_path() {
            if let Ok(content) = fs::read_to_string(&config_path) {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                    if let Some(dir) = json.get("data_dir").and_then(|v| v.as_str()) {
                        settings.data_dir = PathBuf::from(dir);
                    }
                    if let Some(lang) = json.get("startup_language").and_then(|v| v.as_str()) {
                        settings.startup_language = Language::from_str(lang);
                    }
                }
            }
        }

        settings
    }

    /// Save settings to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path =
            Self::config_file_path().context("Failed to get config directory")?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::json!({
            "data_dir": self.data_dir.to_string_lossy(),
            "startup_language": self.startup_language.as_str(),
        });

        let content =
            serde_json::to_string_pretty(&json).context("Failed to serialize settings")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        Ok(())
    }
}
