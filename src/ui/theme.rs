//! Chrome colours for the editor UI
//!
//! Gradients belong to the document (see `palette`); the theme only covers
//! backgrounds, text, borders and the accent.

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Cards and panels drawn on top of the background
    pub surface: Color,
    /// Expanded panel body
    pub surface_alt: Color,
    /// Primary text
    pub foreground: Color,
    /// Secondary text (descriptions, hints)
    pub dimmed: Color,
    /// Borders and placeholders
    pub dimmed_alt: Color,
    /// Focus rings, active section, selected option
    pub accent: Color,
    /// Background of the highlighted row
    pub selection_bg: Color,
    /// Text on top of gradients
    pub on_gradient: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    /// Slate - default dark theme
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),     // #0f172a (slate-900)
            surface: Color::Rgb(30, 41, 59),        // #1e293b (slate-800)
            surface_alt: Color::Rgb(51, 65, 85),    // #334155 (slate-700)
            foreground: Color::Rgb(241, 245, 249),  // #f1f5f9 (slate-100)
            dimmed: Color::Rgb(148, 163, 184),      // #94a3b8 (slate-400)
            dimmed_alt: Color::Rgb(100, 116, 139),  // #64748b (slate-500)
            accent: Color::Rgb(168, 85, 247),       // #a855f7 (purple-500)
            selection_bg: Color::Rgb(59, 7, 100),   // #3b0764 (purple-950)
            on_gradient: Color::Rgb(255, 255, 255),
        }
    }

    /// Daylight - light theme matching the mockups
    pub fn daylight() -> Self {
        Self {
            background: Color::Rgb(248, 250, 252),  // #f8fafc (slate-50)
            surface: Color::Rgb(255, 255, 255),
            surface_alt: Color::Rgb(241, 245, 249), // #f1f5f9 (slate-100)
            foreground: Color::Rgb(15, 23, 42),     // #0f172a (slate-900)
            dimmed: Color::Rgb(100, 116, 139),      // #64748b (slate-500)
            dimmed_alt: Color::Rgb(203, 213, 225),  // #cbd5e1 (slate-300)
            accent: Color::Rgb(147, 51, 234),       // #9333ea (purple-600)
            selection_bg: Color::Rgb(243, 232, 255), // #f3e8ff (purple-100)
            on_gradient: Color::Rgb(255, 255, 255),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),     // #2e3440 (nord0)
            surface: Color::Rgb(59, 66, 82),        // #3b4252 (nord1)
            surface_alt: Color::Rgb(67, 76, 94),    // #434c5e (nord2)
            foreground: Color::Rgb(236, 239, 244),  // #eceff4 (nord6)
            dimmed: Color::Rgb(216, 222, 233),      // #d8dee9 (nord4)
            dimmed_alt: Color::Rgb(76, 86, 106),    // #4c566a (nord3)
            accent: Color::Rgb(180, 142, 173),      // #b48ead (nord15)
            selection_bg: Color::Rgb(76, 86, 106),  // #4c566a (nord3)
            on_gradient: Color::Rgb(255, 255, 255),
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "slate" | "default" | "dark" => Some(Self::slate()),
            "daylight" | "light" => Some(Self::daylight()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .ok_or(ColorError::InvalidHex)
    };

    match s.len() {
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde helpers for optional hex colors in the config file
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    pub fn serialize_option<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(Color::Rgb(r, g, b)) => {
                serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", r, g, b))
            }
            Some(other) => serializer.serialize_str(&other.to_string()),
            None => serializer.serialize_none(),
        }
    }
}
