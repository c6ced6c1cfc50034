//! Suggestion strip and export row.
//!
//! Both are display-only: nothing here can receive focus or touch the
//! document.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::chip::{Chip, ChipFill};
use super::layout::{flow, Align};
use super::theme::Theme;
use crate::catalog::{EXPORT_OPTIONS, SUGGESTIONS};
use crate::palette::Gradient;

/// Chip text colour on the pale suggestion gradient (slate-700)
const CHIP_TEXT: Color = Color::Rgb(51, 65, 85);

/// "AI Suggestions" box under the preview
pub struct SuggestionStrip<'a> {
    theme: &'a Theme,
}

impl<'a> SuggestionStrip<'a> {
    /// Border, title row, one chip row, border
    pub const HEIGHT: u16 = 5;

    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for SuggestionStrip<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.dimmed_alt))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let title = Line::from(vec![
            Span::styled("✦ ", Style::default().fg(theme.accent)),
            Span::styled(
                "AI Suggestions",
                Style::default().fg(theme.dimmed).add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        let chips_area = Rect {
            x: inner.x + 1,
            y: inner.y + 2,
            width: inner.width.saturating_sub(2),
            height: inner.height.saturating_sub(2),
        };
        let labels: Vec<String> = SUGGESTIONS.iter().map(|s| s.text()).collect();
        let widths: Vec<u16> = labels.iter().map(|l| Chip::width(l)).collect();
        let rects = flow(chips_area, &widths, 1, 1, Align::Start);
        for (label, rect) in labels.iter().zip(rects) {
            Chip::new(label, ChipFill::Gradient(Gradient::CHIP), CHIP_TEXT).render(rect, buf);
        }
    }
}

/// Export buttons along the bottom of the editor
pub struct ExportRow<'a> {
    theme: &'a Theme,
}

impl<'a> ExportRow<'a> {
    /// Top border plus one button row
    pub const HEIGHT: u16 = 2;

    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for ExportRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.dimmed_alt))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let buttons_area = Rect {
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let labels: Vec<String> = EXPORT_OPTIONS
            .iter()
            .map(|o| format!("⤓ {}", o.label))
            .collect();
        let widths: Vec<u16> = labels.iter().map(|l| Chip::width(l)).collect();
        let rects = flow(buttons_area, &widths, 1, 1, Align::End);
        for (label, rect) in labels.iter().zip(rects) {
            Chip::new(label, ChipFill::Solid(theme.surface_alt), theme.foreground).render(rect, buf);
        }
    }
}
