//! The ad creative being edited.
//!
//! `EditableDocument` is the only mutable record in the program. It is
//! created once with fixed defaults, owned by [`crate::app::App`], and
//! changed field by field through the setters below.

use std::fmt;

use ratatui::style::Modifier;
use serde::{Serialize, Serializer};

use crate::palette::{self, Gradient};

/// Font families offered by the font selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontChoice {
    Inter,
    Georgia,
    CourierNew,
    Arial,
}

impl FontChoice {
    pub const ALL: [FontChoice; 4] = [
        FontChoice::Inter,
        FontChoice::Georgia,
        FontChoice::CourierNew,
        FontChoice::Arial,
    ];

    /// Font family identifier stored in the document
    pub fn id(self) -> &'static str {
        match self {
            FontChoice::Inter => "Inter",
            FontChoice::Georgia => "Georgia",
            FontChoice::CourierNew => "Courier New",
            FontChoice::Arial => "Arial",
        }
    }

    /// Label shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            FontChoice::CourierNew => "Courier",
            other => other.id(),
        }
    }

    /// Terminal stand-in for the typeface.
    ///
    /// A terminal has one font, so each family gets a distinct text treatment.
    pub fn modifier(self) -> Modifier {
        match self {
            FontChoice::Inter => Modifier::BOLD,
            FontChoice::Georgia => Modifier::ITALIC,
            FontChoice::CourierNew => Modifier::empty(),
            FontChoice::Arial => Modifier::BOLD | Modifier::ITALIC,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Background gradients offered by the colour swatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundPreset {
    PurplePink,
    OrangeRed,
    GreenTeal,
    BlueCyan,
}

impl BackgroundPreset {
    pub const ALL: [BackgroundPreset; 4] = [
        BackgroundPreset::PurplePink,
        BackgroundPreset::OrangeRed,
        BackgroundPreset::GreenTeal,
        BackgroundPreset::BlueCyan,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BackgroundPreset::PurplePink => "from-purple-300 to-pink-300",
            BackgroundPreset::OrangeRed => "from-orange-300 to-red-300",
            BackgroundPreset::GreenTeal => "from-green-300 to-teal-300",
            BackgroundPreset::BlueCyan => "from-blue-300 to-cyan-300",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundPreset::PurplePink => "Purple → Pink",
            BackgroundPreset::OrangeRed => "Orange → Red",
            BackgroundPreset::GreenTeal => "Green → Teal",
            BackgroundPreset::BlueCyan => "Blue → Cyan",
        }
    }

    pub fn gradient(self) -> Gradient {
        match self {
            BackgroundPreset::PurplePink => Gradient::new(palette::PURPLE_300, palette::PINK_300),
            BackgroundPreset::OrangeRed => Gradient::new(palette::ORANGE_300, palette::RED_300),
            BackgroundPreset::GreenTeal => Gradient::new(palette::GREEN_300, palette::TEAL_300),
            BackgroundPreset::BlueCyan => Gradient::new(palette::BLUE_300, palette::CYAN_300),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&b| b == self).unwrap_or(0)
    }
}

impl fmt::Display for BackgroundPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for FontChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl Serialize for BackgroundPreset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// The creative: headline, subtext, font and background
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableDocument {
    headline: String,
    subtext: String,
    #[serde(rename = "backgroundColor")]
    background: BackgroundPreset,
    #[serde(rename = "fontFamily")]
    font: FontChoice,
}

impl Default for EditableDocument {
    fn default() -> Self {
        Self {
            headline: "Summer Promo".to_string(),
            subtext: "Get 40% off today".to_string(),
            background: BackgroundPreset::PurplePink,
            font: FontChoice::Inter,
        }
    }
}

impl EditableDocument {
    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn subtext(&self) -> &str {
        &self.subtext
    }

    pub fn background(&self) -> BackgroundPreset {
        self.background
    }

    pub fn font(&self) -> FontChoice {
        self.font
    }

    pub fn set_headline(&mut self, headline: impl Into<String>) {
        self.headline = headline.into();
    }

    pub fn set_subtext(&mut self, subtext: impl Into<String>) {
        self.subtext = subtext.into();
    }

    pub fn set_background(&mut self, background: BackgroundPreset) {
        self.background = background;
    }

    pub fn set_font(&mut self, font: FontChoice) {
        self.font = font;
    }
}
