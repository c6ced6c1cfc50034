//! Placement helpers for cards and chip rows
//!
//! Provides:
//! - Responsive card grid (1 column when narrow, 3 when wide)
//! - Wrapping flow layout for chips and buttons
//! - Centering

use ratatui::layout::Rect;

/// Terminal width from which the dashboard shows cards side by side
pub const WIDE_BREAKPOINT: u16 = 90;

/// Card grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    /// Number of columns
    pub columns: u16,
    /// Gap between cards, both axes
    pub gap: u16,
}

impl CardGrid {
    /// Create a new grid layout
    pub fn new(columns: u16, gap: u16) -> Self {
        Self {
            columns: columns.clamp(1, 6),
            gap,
        }
    }

    /// One column below the breakpoint, three above it
    pub fn for_width(width: u16) -> Self {
        if width >= WIDE_BREAKPOINT {
            Self::new(3, 2)
        } else {
            Self::new(1, 1)
        }
    }

    /// Row-major cell rectangles for `count` cards of `card_height` rows.
    ///
    /// Cards that would cross the bottom edge of `area` are left out.
    pub fn cells(&self, area: Rect, count: usize, card_height: u16) -> Vec<Rect> {
        if area.is_empty() || card_height == 0 {
            return Vec::new();
        }

        let columns = self.columns as usize;
        let gaps = self.gap * (self.columns - 1);
        let column_width = area.width.saturating_sub(gaps) / self.columns;
        if column_width == 0 {
            return Vec::new();
        }

        let mut cells = Vec::with_capacity(count);
        for index in 0..count {
            let row = (index / columns) as u16;
            let col = (index % columns) as u16;
            let y = area.y + row * (card_height + self.gap);
            if y + card_height > area.bottom() {
                break;
            }
            cells.push(Rect {
                x: area.x + col * (column_width + self.gap),
                y,
                width: column_width,
                height: card_height,
            });
        }
        cells
    }
}

/// Horizontal alignment of a flow row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

/// Lay items of the given widths out left to right, wrapping onto new rows.
///
/// Returns one rect per item that fits; placement stops at the first item
/// that would fall below `area`.
pub fn flow(area: Rect, widths: &[u16], gap: u16, row_height: u16, align: Align) -> Vec<Rect> {
    if area.is_empty() || row_height == 0 {
        return Vec::new();
    }

    // Group item indices into rows first so each row can be aligned
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut used = 0u16;
    for (idx, &width) in widths.iter().enumerate() {
        let width = width.min(area.width);
        match rows.last_mut() {
            Some(row) if used + gap + width <= area.width => {
                row.push(idx);
                used += gap + width;
            }
            _ => {
                rows.push(vec![idx]);
                used = width;
            }
        }
    }

    let mut rects = Vec::with_capacity(widths.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let y = area.y + row_idx as u16 * (row_height + 1);
        if y + row_height > area.bottom() {
            break;
        }
        let row_width: u16 = row.iter().map(|&i| widths[i].min(area.width)).sum::<u16>()
            + gap * (row.len() as u16 - 1);
        let mut x = match align {
            Align::Start => area.x,
            Align::Center => area.x + (area.width - row_width) / 2,
            Align::End => area.right() - row_width,
        };
        for &i in row {
            let width = widths[i].min(area.width);
            rects.push(Rect::new(x, y, width, row_height));
            x += width + gap;
        }
    }
    rects
}

/// A `width` x `height` rect centred in `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
