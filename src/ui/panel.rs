//! Property panel: four accordion sections, one bound control each

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::gradient::{GradientDirection, GradientFill};
use super::text::{tail, truncate};
use super::theme::Theme;
use crate::document::{BackgroundPreset, EditableDocument, FontChoice};
use crate::editor::{EditorState, Focus, Section};

/// Visible rows of the subtext textarea
const SUBTEXT_ROWS: u16 = 3;

/// Render the panel into `buf`.
///
/// Returns the caret position when a text field has focus.
pub fn render(
    area: Rect,
    buf: &mut Buffer,
    doc: &EditableDocument,
    editor: &EditorState,
    theme: &Theme,
) -> Option<Position> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Edit Panel ")
        .title_style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.is_empty() {
        return None;
    }

    let mut y = inner.y;
    let mut caret = None;
    for section in Section::ALL {
        if y >= inner.bottom() {
            break;
        }
        render_header(inner, y, buf, section, editor, theme);
        y += 1;

        if editor.is_expanded(section) {
            let height = body_height(section).min(inner.bottom() - y);
            let body = Rect::new(inner.x, y, inner.width, height);
            caret = render_body(body, buf, section, doc, editor, theme);
            y += height;
        }

        if y < inner.bottom() {
            let rule = "─".repeat(inner.width as usize);
            buf.set_string(inner.x, y, rule, Style::default().fg(theme.dimmed_alt));
            y += 1;
        }
    }
    caret
}

/// Rows used by an expanded section body, padding included
fn body_height(section: Section) -> u16 {
    match section {
        Section::Headline => 5,
        Section::Subtext => SUBTEXT_ROWS + 4,
        Section::Fonts => FontChoice::ALL.len() as u16 + 2,
        Section::Colors => BackgroundPreset::ALL.len() as u16 + 2,
    }
}

fn render_header(
    inner: Rect,
    y: u16,
    buf: &mut Buffer,
    section: Section,
    editor: &EditorState,
    theme: &Theme,
) {
    let row = Rect::new(inner.x, y, inner.width, 1);
    let highlighted = editor.focus() == Focus::Sections && editor.cursor() == section;
    if highlighted {
        buf.set_style(row, Style::default().bg(theme.selection_bg));
    }

    let expanded = editor.is_expanded(section);
    let label_style = if expanded {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD)
    };

    let width = inner.width as usize;
    buf.set_stringn(
        inner.x + 1,
        y,
        section.icon(),
        width.saturating_sub(1),
        Style::default().fg(theme.dimmed),
    );
    buf.set_stringn(
        inner.x + 4,
        y,
        section.label(),
        width.saturating_sub(4),
        label_style,
    );

    let arrow = if expanded { "▲" } else { "▼" };
    if inner.width > 2 {
        buf.set_string(inner.right() - 2, y, arrow, Style::default().fg(theme.dimmed));
    }
}

fn render_body(
    body: Rect,
    buf: &mut Buffer,
    section: Section,
    doc: &EditableDocument,
    editor: &EditorState,
    theme: &Theme,
) -> Option<Position> {
    buf.set_style(body, Style::default().bg(theme.surface_alt));

    // px-6 py-4
    let content = Rect {
        x: body.x + 2,
        y: body.y + 1,
        width: body.width.saturating_sub(4),
        height: body.height.saturating_sub(2),
    };
    if content.is_empty() {
        return None;
    }

    let focused = editor.focus() == Focus::Field;
    match section {
        Section::Headline => {
            let lines = [doc.headline()];
            render_input(content, buf, &lines, "Enter headline", focused, theme)
        }
        Section::Subtext => {
            let lines: Vec<&str> = doc.subtext().split('\n').collect();
            render_input(content, buf, &lines, "Enter subtext", focused, theme)
        }
        Section::Fonts => {
            render_fonts(content, buf, doc.font(), focused, theme);
            None
        }
        Section::Colors => {
            render_swatches(content, buf, doc.background(), editor, theme);
            None
        }
    }
}

/// Bordered input showing the last lines of `lines`, each scrolled to its end
fn render_input(
    area: Rect,
    buf: &mut Buffer,
    lines: &[&str],
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) -> Option<Position> {
    let border = if focused { theme.accent } else { theme.dimmed_alt };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.is_empty() {
        return None;
    }

    let width = inner.width as usize;
    let empty = lines.iter().all(|l| l.is_empty());
    if empty {
        buf.set_string(
            inner.x,
            inner.y,
            truncate(placeholder, width),
            Style::default().fg(theme.dimmed_alt),
        );
        return focused.then_some(Position::new(inner.x, inner.y));
    }

    // Leave a cell for the caret after the last character
    let visible = inner.height as usize;
    let skip = lines.len().saturating_sub(visible);
    let mut caret = Position::new(inner.x, inner.y);
    for (row, line) in lines.iter().skip(skip).enumerate() {
        let shown = tail(line, width.saturating_sub(1));
        let y = inner.y + row as u16;
        buf.set_string(inner.x, y, shown, Style::default().fg(theme.foreground));
        caret = Position::new(inner.x + shown.width() as u16, y);
    }

    focused.then_some(caret)
}

fn render_fonts(area: Rect, buf: &mut Buffer, current: FontChoice, focused: bool, theme: &Theme) {
    let width = area.width as usize;
    for (i, font) in FontChoice::ALL.into_iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let selected = font == current;
        let marker = if selected { "●" } else { "○" };
        let mut style = Style::default().fg(theme.foreground).add_modifier(font.modifier());
        if selected {
            style = style.fg(theme.accent);
            if focused {
                buf.set_style(
                    Rect::new(area.x, y, area.width, 1),
                    Style::default().bg(theme.selection_bg),
                );
            }
        }
        let text = format!("{} {}  {}", marker, i + 1, font.label());
        buf.set_stringn(area.x, y, text, width, style);
    }
}

fn render_swatches(
    area: Rect,
    buf: &mut Buffer,
    current: BackgroundPreset,
    editor: &EditorState,
    theme: &Theme,
) {
    let focused = editor.focus() == Focus::Field;
    for (i, preset) in BackgroundPreset::ALL.into_iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }

        let pointer = if focused && editor.swatch_cursor() == i { "▸" } else { " " };
        buf.set_string(area.x, y, pointer, Style::default().fg(theme.accent));

        let swatch = Rect::new(
            area.x + 2,
            y,
            area.width.saturating_sub(4),
            1,
        );
        GradientFill::new(preset.gradient(), GradientDirection::Horizontal).render(swatch, buf);

        let label = format!("{} {}", i + 1, preset.label());
        let style = Style::default().fg(theme.on_gradient).add_modifier(Modifier::BOLD);
        buf.set_stringn(swatch.x + 1, y, label, swatch.width.saturating_sub(1) as usize, style);

        if preset == current && area.width > 0 {
            buf.set_string(area.right() - 1, y, "✓", Style::default().fg(theme.accent));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::{buffer_text, row_text};

    fn draw(doc: &EditableDocument, editor: &EditorState) -> (Buffer, Option<Position>) {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 36, 24);
        let mut buf = Buffer::empty(area);
        let caret = render(area, &mut buf, doc, editor, &theme);
        (buf, caret)
    }

    fn row_of(buf: &Buffer, needle: &str) -> Option<u16> {
        (0..buf.area.height).find(|&y| row_text(buf, y).contains(needle))
    }

    #[test]
    fn test_collapsed_panel_lists_sections() {
        let doc = EditableDocument::default();
        let (buf, caret) = draw(&doc, &EditorState::new(None));

        let headline = row_of(&buf, "Headline").unwrap();
        let subtext = row_of(&buf, "Subtext").unwrap();
        let fonts = row_of(&buf, "Fonts").unwrap();
        let colors = row_of(&buf, "Colors").unwrap();
        assert!(headline < subtext && subtext < fonts && fonts < colors);
        assert_eq!(caret, None);
        assert!(!buffer_text(&buf).contains("▲"));
    }

    #[test]
    fn test_headline_input_shows_text_and_caret() {
        let doc = EditableDocument::default();
        let editor = EditorState::default();
        let (buf, caret) = draw(&doc, &editor);

        let row = row_of(&buf, "Summer Promo").unwrap();
        let caret = caret.unwrap();
        assert_eq!(caret.y, row);
        // Caret sits just past the last character
        assert_eq!(buf[(caret.x - 1, caret.y)].symbol(), "o");
        assert_eq!(buf[(caret.x - 12, caret.y)].symbol(), "S");
        assert!(row_text(&buf, row_of(&buf, "Headline").unwrap()).contains("▲"));
    }

    #[test]
    fn test_empty_headline_shows_placeholder() {
        let mut doc = EditableDocument::default();
        doc.set_headline("");
        let (buf, _) = draw(&doc, &EditorState::default());
        assert!(row_of(&buf, "Enter headline").is_some());
    }

    #[test]
    fn test_subtext_shows_last_lines() {
        let mut doc = EditableDocument::default();
        doc.set_subtext("one\ntwo\nthree\nfour");
        let (buf, caret) = draw(&doc, &EditorState::new(Some(Section::Subtext)));

        assert!(row_of(&buf, "one").is_none());
        let four = row_of(&buf, "four").unwrap();
        assert_eq!(row_of(&buf, "two").unwrap() + 2, four);
        assert_eq!(caret.unwrap().y, four);
    }

    #[test]
    fn test_fonts_mark_current_choice() {
        let mut doc = EditableDocument::default();
        doc.set_font(FontChoice::CourierNew);
        let (buf, caret) = draw(&doc, &EditorState::new(Some(Section::Fonts)));

        assert!(row_text(&buf, row_of(&buf, "Courier").unwrap()).contains("●"));
        assert!(row_text(&buf, row_of(&buf, "Inter").unwrap()).contains("○"));
        assert_eq!(caret, None);
    }

    #[test]
    fn test_swatches_mark_current_and_cursor() {
        let mut doc = EditableDocument::default();
        doc.set_background(BackgroundPreset::GreenTeal);
        let (buf, _) = draw(&doc, &EditorState::new(Some(Section::Colors)));

        let green = row_text(&buf, row_of(&buf, "Green → Teal").unwrap());
        assert!(green.contains("✓"));
        let purple = row_text(&buf, row_of(&buf, "Purple → Pink").unwrap());
        assert!(purple.contains("▸"));
        assert!(!purple.contains("✓"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let doc = EditableDocument::default();
        let theme = Theme::default();
        for (w, h) in [(0, 0), (3, 3), (10, 4), (36, 6)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            render(area, &mut buf, &doc, &EditorState::new(Some(Section::Subtext)), &theme);
        }
    }
}
