use crate::color::Color;
use crate::font::FontSpec;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";

/// Defaults read from the settings file. Command line options win over
/// everything here.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Background color, same syntax as `--color`.
    #[serde(default)]
    pub color: Option<String>,
    /// Text color, same syntax as `--text-color`.
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub hide_cursor: bool,
    #[serde(default)]
    pub borderless: bool,
    /// Start in a window rather than fullscreen.
    #[serde(default)]
    pub window: bool,
    /// Refresh interval in seconds used with `--command` when `--interval`
    /// is not given.
    #[serde(default)]
    pub interval: Option<f64>,
}

impl Settings {
    /// Default location, `<config dir>/flashlight/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|d| d.join("flashlight").join(SETTINGS_FILE))
    }

    /// Load settings, treating a missing or empty file as defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn background(&self) -> anyhow::Result<Option<Color>> {
        self.color
            .as_deref()
            .map(|c| c.parse::<Color>().context("settings: color"))
            .transpose()
    }

    pub fn foreground(&self) -> anyhow::Result<Option<Color>> {
        self.text_color
            .as_deref()
            .map(|c| c.parse::<Color>().context("settings: text_color"))
            .transpose()
    }

    pub fn font_spec(&self) -> anyhow::Result<Option<FontSpec>> {
        self.font
            .as_deref()
            .map(|f| f.parse::<FontSpec>().context("settings: font"))
            .transpose()
    }
}
