//! Fixed reference data shown by the dashboard and the editor decorations.

use crate::palette::{self, Gradient};

/// A prior creation listed on the dashboard
#[derive(Debug, Clone, Copy)]
pub struct RecentCreation {
    #[allow(dead_code)] // stable key, only compared in tests
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
    pub emoji: &'static str,
}

/// A chip in the AI suggestion strip
#[derive(Debug, Clone, Copy)]
pub struct Suggestion {
    #[allow(dead_code)]
    pub id: u32,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A button in the export row
#[derive(Debug, Clone, Copy)]
pub struct ExportOption {
    #[allow(dead_code)]
    pub id: &'static str,
    pub label: &'static str,
}

pub const RECENT_CREATIONS: [RecentCreation; 3] = [
    RecentCreation {
        id: 1,
        title: "Summer Promo Ad",
        description: "Retail media creative",
        gradient: Gradient::new(palette::ORANGE_300, palette::RED_300),
        emoji: "🌞",
    },
    RecentCreation {
        id: 2,
        title: "Grocery Discount Banner",
        description: "Seasonal promotion",
        gradient: Gradient::new(palette::GREEN_300, palette::TEAL_300),
        emoji: "🛒",
    },
    RecentCreation {
        id: 3,
        title: "Fashion Flash Sale",
        description: "Limited time offer",
        gradient: Gradient::new(palette::PINK_300, palette::PURPLE_300),
        emoji: "👗",
    },
];

pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion { id: 1, label: "Layout 1", icon: "■■" },
    Suggestion { id: 2, label: "Layout 2", icon: "□□" },
    Suggestion { id: 3, label: "Font Set 1", icon: "A" },
    Suggestion { id: 4, label: "Background 1", icon: "◆" },
];

pub const EXPORT_OPTIONS: [ExportOption; 4] = [
    ExportOption { id: "png", label: "PNG" },
    ExportOption { id: "jpg", label: "JPG" },
    ExportOption { id: "story", label: "Story Size" },
    ExportOption { id: "post", label: "Post Size" },
];

impl Suggestion {
    /// Chip text, icon first
    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let creations: HashSet<_> = RECENT_CREATIONS.iter().map(|c| c.id).collect();
        assert_eq!(creations.len(), RECENT_CREATIONS.len());

        let suggestions: HashSet<_> = SUGGESTIONS.iter().map(|s| s.id).collect();
        assert_eq!(suggestions.len(), SUGGESTIONS.len());

        let exports: HashSet<_> = EXPORT_OPTIONS.iter().map(|e| e.id).collect();
        assert_eq!(exports.len(), EXPORT_OPTIONS.len());
    }

    #[test]
    fn test_suggestion_text() {
        assert_eq!(SUGGESTIONS[2].text(), "A Font Set 1");
    }
}
