use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ratatui::style::Color;

use crate::editor::Section;
use crate::ui::theme::{serde_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset: "slate", "daylight", "nord"
    pub theme: String,
    /// Optional accent override as hex (#rrggbb or #rgb)
    #[serde(
        default,
        deserialize_with = "serde_color::deserialize_option",
        serialize_with = "serde_color::serialize_option"
    )]
    pub accent: Option<Color>,
    /// Show the key hint bar at the bottom of each screen
    pub show_hints: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Section expanded when the editor opens: "headline", "subtext",
    /// "fonts", "colors" or "none"
    pub initial_section: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "slate".to_string(),
            accent: None,
            show_hints: true,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_section: "headline".to_string(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/creato/config.toml` or the platform equivalent
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("creato")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Section to expand on editor entry; unknown names fall back to headline
    pub fn initial_section(&self) -> Option<Section> {
        let name = self.editor.initial_section.trim();
        if name.eq_ignore_ascii_case("none") {
            return None;
        }
        match name.parse() {
            Ok(section) => Some(section),
            Err(e) => {
                tracing::warn!("{}, using headline", e);
                Some(Section::Headline)
            }
        }
    }

    /// Build the theme from preset + overrides
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using slate", self.appearance.theme);
            Theme::default()
        });

        if let Some(accent) = self.appearance.accent {
            theme.accent = accent;
        }

        theme
    }
}
