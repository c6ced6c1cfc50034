//! Button-like label with a solid or gradient background

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::gradient::{GradientDirection, GradientFill};
use super::text::truncate;
use crate::palette::Gradient;

/// Horizontal padding on each side of the label
const PADDING: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub enum ChipFill {
    Solid(Color),
    Gradient(Gradient),
}

/// Chip widget
pub struct Chip<'a> {
    label: &'a str,
    fill: ChipFill,
    fg: Color,
    bold: bool,
}

impl<'a> Chip<'a> {
    pub fn new(label: &'a str, fill: ChipFill, fg: Color) -> Self {
        Self {
            label,
            fill,
            fg,
            bold: false,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Width needed to show the label with padding
    pub fn width(label: &str) -> u16 {
        label.width() as u16 + PADDING * 2
    }
}

impl<'a> Widget for Chip<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        match self.fill {
            ChipFill::Solid(color) => buf.set_style(area, Style::default().bg(color)),
            ChipFill::Gradient(gradient) => {
                GradientFill::new(gradient, GradientDirection::Horizontal).render(area, buf)
            }
        }

        let inner_width = area.width.saturating_sub(PADDING * 2) as usize;
        let label = truncate(self.label, inner_width);
        let x = area.x + (area.width - label.width() as u16) / 2;
        let y = area.y + area.height / 2;

        let mut style = Style::default().fg(self.fg);
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_string(x, y, label, style);
    }
}
