//! Live preview of the creative

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::gradient::{GradientDirection, GradientFill};
use super::layout::centered;
use super::theme::Theme;
use crate::document::EditableDocument;

/// Card size in cells, roughly the 384x256 px canvas of the mockups
const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 16;

/// Preview widget: a pure function of the document
pub struct Preview<'a> {
    document: &'a EditableDocument,
    theme: &'a Theme,
}

impl<'a> Preview<'a> {
    pub fn new(document: &'a EditableDocument, theme: &'a Theme) -> Self {
        Self { document, theme }
    }

    /// Where the creative card sits inside the canvas `area`
    pub fn card_rect(area: Rect) -> Rect {
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        centered(inner, CARD_WIDTH, CARD_HEIGHT)
    }
}

impl<'a> Widget for Preview<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.surface));

        let card = Self::card_rect(area);
        if card.is_empty() {
            return;
        }

        let doc = self.document;
        GradientFill::new(doc.background().gradient(), GradientDirection::Diagonal)
            .render(card, buf);

        // p-8
        let inner = Rect {
            x: card.x + 3,
            y: card.y + 1,
            width: card.width.saturating_sub(6),
            height: card.height.saturating_sub(2),
        };
        if inner.is_empty() {
            return;
        }

        let font = doc.font().modifier();
        let fg = self.theme.on_gradient;

        let mut lines = vec![
            Line::styled(
                doc.headline(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD | font),
            ),
            Line::raw(""),
        ];
        lines.extend(
            doc.subtext()
                .split('\n')
                .map(|line| Line::styled(line, Style::default().fg(fg).add_modifier(font))),
        );

        let body = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        // Footer: placeholder left, font label right
        let footer_y = inner.bottom() - 1;
        let footer_style = Style::default().fg(fg).add_modifier(Modifier::DIM);
        let footer = Rect::new(inner.x, footer_y, inner.width, 1);
        Paragraph::new(Span::styled("Product Image Here", footer_style)).render(footer, buf);

        let font_label = format!("Aa {}", doc.font().id());
        if font_label.width() as u16 + 20 <= inner.width {
            Paragraph::new(Span::styled(
                font_label,
                Style::default().fg(fg).add_modifier(font),
            ))
            .alignment(Alignment::Right)
            .render(footer, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BackgroundPreset, FontChoice};
    use crate::ui::tests::{buffer_text, row_text};

    fn render(doc: &EditableDocument, area: Rect) -> Buffer {
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);
        Preview::new(doc, &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_card_rect_centered() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(Preview::card_rect(area), Rect::new(16, 4, 48, 16));
    }

    #[test]
    fn test_shows_default_document() {
        let doc = EditableDocument::default();
        let buf = render(&doc, Rect::new(0, 0, 80, 24));
        let text = buffer_text(&buf);

        assert!(text.contains("Summer Promo"));
        assert!(text.contains("Get 40% off today"));
        assert!(text.contains("Product Image Here"));
        assert!(text.contains("Aa Inter"));

        let card = Preview::card_rect(buf.area);
        assert_eq!(
            buf[(card.x, card.y)].bg,
            BackgroundPreset::PurplePink.gradient().from
        );
    }

    #[test]
    fn test_reflects_every_field() {
        let mut doc = EditableDocument::default();
        doc.set_headline("Back to School");
        doc.set_subtext("Pens\nPaper");
        doc.set_font(FontChoice::Georgia);
        doc.set_background(BackgroundPreset::GreenTeal);

        let buf = render(&doc, Rect::new(0, 0, 80, 24));
        let card = Preview::card_rect(buf.area);
        let headline_row = card.y + 1;

        assert!(row_text(&buf, headline_row).contains("Back to School"));
        assert!(row_text(&buf, headline_row + 2).contains("Pens"));
        assert!(row_text(&buf, headline_row + 3).contains("Paper"));
        assert!(buffer_text(&buf).contains("Aa Georgia"));
        assert!(!buffer_text(&buf).contains("Summer Promo"));

        let cell = &buf[(card.x + 3, headline_row)];
        assert!(cell.modifier.contains(Modifier::ITALIC));
        assert_eq!(
            buf[(card.right() - 1, card.bottom() - 1)].bg,
            BackgroundPreset::GreenTeal.gradient().to
        );
    }

    #[test]
    fn test_empty_headline_renders() {
        let mut doc = EditableDocument::default();
        doc.set_headline("");
        let buf = render(&doc, Rect::new(0, 0, 80, 24));
        assert!(buffer_text(&buf).contains("Get 40% off today"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let doc = EditableDocument::default();
        render(&doc, Rect::new(0, 0, 3, 2));
        render(&doc, Rect::new(0, 0, 10, 3));
    }
}
