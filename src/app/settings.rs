use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Window chrome preferences, persisted as JSON under the user config dir.
/// Only chrome lives here — brief text, kind, toggle and generated output
/// are per-session and never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Last directory used in an export dialog.
    #[serde(default)]
    pub last_export_directory: Option<String>,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_font_size() -> u32 {
    15
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            last_export_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create defaults if not present
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                let _ = default.save_to(path);
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
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
        path.push("briefpad");
        path.push("settings.json");
        path
    }
}
