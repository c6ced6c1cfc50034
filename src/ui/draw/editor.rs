//! Editor drawing functions
//!
//! Composes the editor screen:
//! - Header with the Back control
//! - Preview and suggestion strip on the left, property panel on the right
//! - Export row and status bar along the bottom

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::editor::{EditorState, Focus, Section};
use crate::ui::panel;
use crate::ui::preview::Preview;
use crate::ui::strip::{ExportRow, SuggestionStrip};
use crate::ui::theme::Theme;

/// Width of the property panel (w-80)
const PANEL_WIDTH: u16 = 38;

/// Draw the editor screen
pub(crate) fn draw_editor(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let hints = if app.config().appearance.show_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(1),                  // Workspace
            Constraint::Length(ExportRow::HEIGHT), // Export row
            Constraint::Length(hints),           // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0], app.editor(), theme);
    draw_workspace(f, chunks[1], app, theme);
    f.render_widget(ExportRow::new(theme), chunks[2]);
    if hints > 0 {
        draw_status_bar(f, chunks[3], app.editor(), theme);
    }
}

fn draw_header(f: &mut Frame, area: Rect, editor: &EditorState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.is_empty() {
        return;
    }
    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);

    // Back is one Esc away only from the section list
    let back_style = if editor.focus() == Focus::Sections {
        Style::default().fg(theme.foreground)
    } else {
        Style::default().fg(theme.dimmed)
    };
    let back = Paragraph::new(Span::styled("  ✕ Back", back_style));
    f.render_widget(back, row);

    let title = Paragraph::new(Span::styled(
        "Editing: Summer Promo",
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, row);
}

fn draw_workspace(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(20),             // Canvas column
            Constraint::Length(1),
            Constraint::Length(PANEL_WIDTH), // Property panel
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(SuggestionStrip::HEIGHT),
        ])
        .split(columns[0]);

    f.render_widget(Preview::new(app.document(), theme), left[0]);
    f.render_widget(SuggestionStrip::new(theme), left[2]);

    let caret = panel::render(
        columns[2],
        f.buffer_mut(),
        app.document(),
        app.editor(),
        theme,
    );
    if let Some(position) = caret {
        f.set_cursor_position(position);
    }
}

/// Draw the status bar with hints for the current focus
fn draw_status_bar(f: &mut Frame, area: Rect, editor: &EditorState, theme: &Theme) {
    let status = match (editor.focus(), editor.expanded()) {
        (Focus::Field, Some(Section::Headline)) => " Type to edit headline | Enter/Esc: done",
        (Focus::Field, Some(Section::Subtext)) => {
            " Type to edit subtext | Enter: new line | Esc: done"
        }
        (Focus::Field, Some(Section::Fonts)) => " ↑↓ or 1-4: choose font | Esc: done",
        (Focus::Field, Some(Section::Colors)) => {
            " ↑↓: move | Enter or 1-4: apply swatch | Esc: done"
        }
        _ => " ↑↓: section | Enter: open/close | 1-4: toggle | →: edit open section | Esc: back | q: quit",
    };

    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}
