//! Recent-creation card for the dashboard
//!
//! Renders each creation as:
//! - Gradient thumbnail with the emoji centred
//! - Title (bold)
//! - Description (dimmed)
//! - An "Edit" button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::gradient::{GradientDirection, GradientFill};
use super::text::truncate;
use super::theme::Theme;
use crate::catalog::RecentCreation;

/// Thumbnail rows at the top of a card
const THUMBNAIL_HEIGHT: u16 = 4;

/// Card widget
pub struct CreationCard<'a> {
    creation: &'a RecentCreation,
    theme: &'a Theme,
}

impl<'a> CreationCard<'a> {
    /// Rows a card needs: thumbnail, title, description, gap, button
    pub const HEIGHT: u16 = THUMBNAIL_HEIGHT + 4;

    pub fn new(creation: &'a RecentCreation, theme: &'a Theme) -> Self {
        Self { creation, theme }
    }
}

impl<'a> Widget for CreationCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.theme.surface));

        let thumb = Rect {
            height: THUMBNAIL_HEIGHT.min(area.height),
            ..area
        };
        GradientFill::new(self.creation.gradient, GradientDirection::Diagonal).render(thumb, buf);

        let emoji_width = self.creation.emoji.width() as u16;
        if emoji_width <= thumb.width {
            let x = thumb.x + (thumb.width - emoji_width) / 2;
            let y = thumb.y + thumb.height / 2;
            buf.set_string(x, y, self.creation.emoji, Style::default());
        }

        // Text body with padding
        let padding_x = 2u16;
        let text_x = area.x + padding_x;
        let text_width = area.width.saturating_sub(padding_x * 2) as usize;
        let max_y = area.y + area.height;
        let mut y = thumb.y + thumb.height;

        if y < max_y {
            let style = Style::default()
                .fg(self.theme.foreground)
                .add_modifier(Modifier::BOLD);
            buf.set_string(text_x, y, truncate(self.creation.title, text_width), style);
            y += 1;
        }

        if y < max_y {
            let style = Style::default().fg(self.theme.dimmed);
            buf.set_string(text_x, y, truncate(self.creation.description, text_width), style);
            y += 2;
        }

        // Inert button, full width inside the padding
        if y < max_y && text_width > 0 {
            let button = Rect::new(text_x, y, text_width as u16, 1);
            buf.set_style(button, Style::default().bg(self.theme.surface_alt));
            let label = "Edit";
            let x = button.x + button.width.saturating_sub(label.width() as u16) / 2;
            buf.set_stringn(x, y, label, text_width, Style::default().fg(self.theme.foreground));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RECENT_CREATIONS;
    use crate::ui::tests::row_text;

    #[test]
    fn test_card_layout() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, CreationCard::HEIGHT);
        let mut buf = Buffer::empty(area);
        CreationCard::new(&RECENT_CREATIONS[0], &theme).render(area, &mut buf);

        assert!(row_text(&buf, 4).contains("Summer Promo Ad"));
        assert!(row_text(&buf, 5).contains("Retail media creative"));
        assert!(row_text(&buf, 7).contains("Edit"));
        assert_eq!(buf[(0, 0)].bg, RECENT_CREATIONS[0].gradient.from);
    }

    #[test]
    fn test_narrow_card_truncates_title() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 14, CreationCard::HEIGHT);
        let mut buf = Buffer::empty(area);
        CreationCard::new(&RECENT_CREATIONS[1], &theme).render(area, &mut buf);

        assert_eq!(row_text(&buf, 4).trim(), "Grocery D…");
    }

    #[test]
    fn test_short_area_does_not_panic() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        CreationCard::new(&RECENT_CREATIONS[2], &theme).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, RECENT_CREATIONS[2].gradient.from);
    }
}
