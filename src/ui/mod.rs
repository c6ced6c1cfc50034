//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Screen draw functions (dashboard, editor)
//! - `preview.rs` - Live creative preview
//! - `panel.rs` - Accordion property panel
//! - `strip.rs` - Suggestion strip and export row
//! - `creation_card.rs` - Dashboard card widget
//! - `chip.rs`, `gradient.rs` - Small building blocks
//! - `layout.rs` - Card grid and flow layout
//! - `theme.rs` - Color themes and presets

mod chip;
mod creation_card;
mod draw;
mod gradient;
mod layout;
mod panel;
mod preview;
mod strip;
mod text;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

#[cfg(test)]
pub(crate) mod tests {
    use ratatui::buffer::Buffer;

    /// Symbols of one buffer row
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// Whole buffer, one line per row
    pub fn buffer_text(buf: &Buffer) -> String {
        (buf.area.top()..buf.area.bottom())
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
