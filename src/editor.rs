//! Editor screen state: which property section is open and where keys go.
//!
//! The editor never owns the document. Input handlers borrow it mutably from
//! the root controller for the duration of one key event and write through
//! its setters, so the next frame's preview always reflects the edit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::document::{BackgroundPreset, EditableDocument, FontChoice};

/// Property panel sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Headline,
    Subtext,
    Fonts,
    Colors,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Headline,
        Section::Subtext,
        Section::Fonts,
        Section::Colors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Headline => "Headline",
            Section::Subtext => "Subtext",
            Section::Fonts => "Fonts",
            Section::Colors => "Colors",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Headline | Section::Subtext => "T",
            Section::Fonts => "▦",
            Section::Colors => "◐",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Section name that matches no panel section
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}' (expected headline, subtext, fonts or colors)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "headline" => Ok(Section::Headline),
            "subtext" => Ok(Section::Subtext),
            "fonts" | "font" => Ok(Section::Fonts),
            "colors" | "colours" | "color" | "background" => Ok(Section::Colors),
            _ => Err(UnknownSection(s.trim().to_string())),
        }
    }
}

/// Where key presses are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Moving between section headers
    Sections,
    /// Typing into or choosing within the expanded section
    Field,
}

/// What the editor asks of the root controller after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Stay,
    Back,
    Quit,
}

/// Editor panel state
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Open accordion section, at most one
    expanded: Option<Section>,
    /// Highlighted section header
    cursor: Section,
    focus: Focus,
    /// Highlighted swatch in the colors section
    swatch_cursor: usize,
}

impl EditorState {
    /// Fresh editor with `initial` expanded and focused
    pub fn new(initial: Option<Section>) -> Self {
        Self {
            expanded: initial,
            cursor: initial.unwrap_or(Section::Headline),
            focus: if initial.is_some() { Focus::Field } else { Focus::Sections },
            swatch_cursor: 0,
        }
    }

    pub fn expanded(&self) -> Option<Section> {
        self.expanded
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded == Some(section)
    }

    pub fn cursor(&self) -> Section {
        self.cursor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn swatch_cursor(&self) -> usize {
        self.swatch_cursor
    }

    /// Accordion toggle: the open section closes, any other replaces it
    pub fn toggle(&mut self, section: Section) {
        self.cursor = section;
        if self.expanded == Some(section) {
            self.expanded = None;
            self.focus = Focus::Sections;
            tracing::debug!(%section, "collapsed section");
        } else {
            self.expanded = Some(section);
            self.focus = Focus::Field;
            tracing::debug!(%section, "expanded section");
        }
    }

    /// Point the swatch cursor at the document's current background
    pub fn sync_with(&mut self, doc: &EditableDocument) {
        self.swatch_cursor = doc.background().index();
    }

    /// Handle a key press, writing any edit straight into `doc`
    pub fn handle_key(&mut self, key: KeyEvent, doc: &mut EditableDocument) -> EditorOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return EditorOutcome::Quit;
        }

        match self.focus {
            Focus::Sections => self.handle_sections_key(key, doc),
            Focus::Field => {
                self.handle_field_key(key, doc);
                EditorOutcome::Stay
            }
        }
    }

    fn handle_sections_key(&mut self, key: KeyEvent, doc: &EditableDocument) -> EditorOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => return EditorOutcome::Back,
            KeyCode::Char('q') => return EditorOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.cursor = self.cursor.prev();
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.cursor = self.cursor.next();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle(self.cursor);
                self.sync_with(doc);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.toggle(Section::ALL[idx]);
                self.sync_with(doc);
            }
            KeyCode::Right | KeyCode::Char('l') if self.expanded == Some(self.cursor) => {
                self.focus = Focus::Field;
                self.sync_with(doc);
            }
            _ => {}
        }
        EditorOutcome::Stay
    }

    fn handle_field_key(&mut self, key: KeyEvent, doc: &mut EditableDocument) {
        if key.code == KeyCode::Esc {
            self.focus = Focus::Sections;
            return;
        }

        let Some(section) = self.expanded else {
            self.focus = Focus::Sections;
            return;
        };

        match section {
            Section::Headline => match key.code {
                KeyCode::Enter => self.focus = Focus::Sections,
                KeyCode::Backspace => {
                    let text = without_last_grapheme(doc.headline()).to_string();
                    doc.set_headline(text);
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut text = doc.headline().to_string();
                    text.push(c);
                    doc.set_headline(text);
                }
                _ => {}
            },
            Section::Subtext => match key.code {
                KeyCode::Enter => {
                    let mut text = doc.subtext().to_string();
                    text.push('\n');
                    doc.set_subtext(text);
                }
                KeyCode::Backspace => {
                    let text = without_last_grapheme(doc.subtext()).to_string();
                    doc.set_subtext(text);
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut text = doc.subtext().to_string();
                    text.push(c);
                    doc.set_subtext(text);
                }
                _ => {}
            },
            Section::Fonts => {
                let current = doc.font().index();
                let picked = match key.code {
                    KeyCode::Up | KeyCode::Char('k') => Some(current.saturating_sub(1)),
                    KeyCode::Down | KeyCode::Char('j') => {
                        Some((current + 1).min(FontChoice::ALL.len() - 1))
                    }
                    KeyCode::Char(c @ '1'..='4') => Some(c as usize - '1' as usize),
                    KeyCode::Enter => {
                        self.focus = Focus::Sections;
                        None
                    }
                    _ => None,
                };
                if let Some(idx) = picked {
                    let font = FontChoice::ALL[idx];
                    if font != doc.font() {
                        tracing::debug!(%font, "font selected");
                        doc.set_font(font);
                    }
                }
            }
            Section::Colors => {
                let last = BackgroundPreset::ALL.len() - 1;
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.swatch_cursor = self.swatch_cursor.saturating_sub(1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.swatch_cursor = (self.swatch_cursor + 1).min(last);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        self.click_swatch(self.swatch_cursor, doc);
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        self.click_swatch(c as usize - '1' as usize, doc);
                    }
                    _ => {}
                }
            }
        }
    }

    fn click_swatch(&mut self, idx: usize, doc: &mut EditableDocument) {
        let Some(&preset) = BackgroundPreset::ALL.get(idx) else {
            return;
        };
        self.swatch_cursor = idx;
        tracing::debug!(background = %preset, "swatch selected");
        doc.set_background(preset);
    }
}

/// `text` minus its last user-perceived character
fn without_last_grapheme(text: &str) -> &str {
    match text.grapheme_indices(true).next_back() {
        Some((start, _)) => &text[..start],
        None => text,
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Some(Section::Headline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(editor: &mut EditorState, doc: &mut EditableDocument, text: &str) {
        for c in text.chars() {
            editor.handle_key(key(KeyCode::Char(c)), doc);
        }
    }

    fn clear_field(editor: &mut EditorState, doc: &mut EditableDocument, len: usize) {
        for _ in 0..len {
            editor.handle_key(key(KeyCode::Backspace), doc);
        }
    }

    #[test]
    fn test_toggle_is_accordion() {
        let mut editor = EditorState::new(None);
        assert_eq!(editor.expanded(), None);

        editor.toggle(Section::Fonts);
        assert_eq!(editor.expanded(), Some(Section::Fonts));

        editor.toggle(Section::Colors);
        assert_eq!(editor.expanded(), Some(Section::Colors));
        assert!(!editor.is_expanded(Section::Fonts));

        editor.toggle(Section::Colors);
        assert_eq!(editor.expanded(), None);
    }

    #[test]
    fn test_toggle_sequence_keeps_at_most_one_open() {
        let mut editor = EditorState::default();
        let sequence = [0, 0, 1, 2, 2, 3, 1, 1, 0, 3, 3, 2, 0];
        for idx in sequence {
            let section = Section::ALL[idx];
            let was_open = editor.is_expanded(section);
            editor.toggle(section);
            let open = Section::ALL.iter().filter(|s| editor.is_expanded(**s)).count();
            assert!(open <= 1);
            if was_open {
                assert_eq!(editor.expanded(), None);
            } else {
                assert_eq!(editor.expanded(), Some(section));
            }
        }
    }

    #[test]
    fn test_headline_typing_writes_through() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::default();
        assert_eq!(editor.focus(), Focus::Field);

        type_text(&mut editor, &mut doc, "!");
        assert_eq!(doc.headline(), "Summer Promo!");

        clear_field(&mut editor, &mut doc, 100);
        assert_eq!(doc.headline(), "");

        // Enter leaves a single-line field without editing it
        editor.handle_key(key(KeyCode::Enter), &mut doc);
        assert_eq!(editor.focus(), Focus::Sections);
        assert_eq!(doc.headline(), "");
    }

    #[test]
    fn test_subtext_enter_inserts_newline() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::new(Some(Section::Subtext));

        editor.handle_key(key(KeyCode::Enter), &mut doc);
        type_text(&mut editor, &mut doc, "Ends Sunday");
        assert_eq!(doc.subtext(), "Get 40% off today\nEnds Sunday");
        assert_eq!(doc.headline(), "Summer Promo");
    }

    #[test]
    fn test_font_selector_changes_only_font() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::new(Some(Section::Fonts));

        editor.handle_key(key(KeyCode::Down), &mut doc);
        assert_eq!(doc.font(), FontChoice::Georgia);

        editor.handle_key(key(KeyCode::Char('3')), &mut doc);
        assert_eq!(doc.font(), FontChoice::CourierNew);

        editor.handle_key(key(KeyCode::Down), &mut doc);
        editor.handle_key(key(KeyCode::Down), &mut doc);
        assert_eq!(doc.font(), FontChoice::Arial);

        assert_eq!(doc.headline(), "Summer Promo");
        assert_eq!(doc.background(), BackgroundPreset::PurplePink);
    }

    #[test]
    fn test_swatch_requires_click() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::new(Some(Section::Colors));

        editor.handle_key(key(KeyCode::Down), &mut doc);
        assert_eq!(editor.swatch_cursor(), 1);
        assert_eq!(doc.background(), BackgroundPreset::PurplePink);

        editor.handle_key(key(KeyCode::Enter), &mut doc);
        assert_eq!(doc.background(), BackgroundPreset::OrangeRed);

        editor.handle_key(key(KeyCode::Char('4')), &mut doc);
        assert_eq!(doc.background(), BackgroundPreset::BlueCyan);
        assert_eq!(doc.font(), FontChoice::Inter);
    }

    #[test]
    fn test_sections_navigation_and_back() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::new(None);
        assert_eq!(editor.focus(), Focus::Sections);

        editor.handle_key(key(KeyCode::Down), &mut doc);
        editor.handle_key(key(KeyCode::Down), &mut doc);
        assert_eq!(editor.cursor(), Section::Fonts);

        editor.handle_key(key(KeyCode::Enter), &mut doc);
        assert_eq!(editor.expanded(), Some(Section::Fonts));
        assert_eq!(editor.focus(), Focus::Field);

        // Esc leaves the field but keeps the section open
        editor.handle_key(key(KeyCode::Esc), &mut doc);
        assert_eq!(editor.focus(), Focus::Sections);
        assert_eq!(editor.expanded(), Some(Section::Fonts));

        assert_eq!(editor.handle_key(key(KeyCode::Esc), &mut doc), EditorOutcome::Back);
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(editor.handle_key(ctrl_c, &mut doc), EditorOutcome::Quit);
        assert_eq!(doc.headline(), "Summer Promo");
    }

    #[test]
    fn test_q_types_in_field_but_quits_from_sections() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::default();
        assert_eq!(editor.handle_key(key(KeyCode::Char('q')), &mut doc), EditorOutcome::Stay);
        assert_eq!(doc.headline(), "Summer Promoq");

        editor.handle_key(key(KeyCode::Esc), &mut doc);
        assert_eq!(editor.handle_key(key(KeyCode::Char('q')), &mut doc), EditorOutcome::Quit);
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("Colors".parse::<Section>(), Ok(Section::Colors));
        assert_eq!(" fonts ".parse::<Section>(), Ok(Section::Fonts));
        assert_eq!(
            "layers".parse::<Section>(),
            Err(UnknownSection("layers".to_string()))
        );
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::default();
        editor.handle_key(key(KeyCode::Char('e')), &mut doc);
        editor.handle_key(key(KeyCode::Char('\u{301}')), &mut doc);
        assert_eq!(doc.headline(), "Summer Promoe\u{301}");

        editor.handle_key(key(KeyCode::Backspace), &mut doc);
        assert_eq!(doc.headline(), "Summer Promo");

        editor.toggle(Section::Subtext);
        doc.set_subtext("ok 👍🏽");
        editor.handle_key(key(KeyCode::Backspace), &mut doc);
        assert_eq!(doc.subtext(), "ok ");
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut doc = EditableDocument::default();
        doc.set_headline("");
        let mut editor = EditorState::default();
        editor.handle_key(key(KeyCode::Backspace), &mut doc);
        assert_eq!(doc.headline(), "");
    }

    #[test]
    fn test_scenario_back_to_school() {
        let mut doc = EditableDocument::default();
        let mut editor = EditorState::default();

        // Headline open on entry; replace its text
        assert_eq!(editor.expanded(), Some(Section::Headline));
        clear_field(&mut editor, &mut doc, "Summer Promo".len());
        type_text(&mut editor, &mut doc, "Back to School");

        // Leave the field and close the section
        editor.handle_key(key(KeyCode::Esc), &mut doc);
        editor.handle_key(key(KeyCode::Enter), &mut doc);
        assert_eq!(editor.expanded(), None);

        // Open colors, pick the third swatch
        editor.handle_key(key(KeyCode::Char('4')), &mut doc);
        assert_eq!(editor.expanded(), Some(Section::Colors));
        editor.handle_key(key(KeyCode::Char('3')), &mut doc);

        assert_eq!(doc.headline(), "Back to School");
        assert_eq!(doc.subtext(), "Get 40% off today");
        assert_eq!(doc.background(), BackgroundPreset::GreenTeal);
        assert_eq!(doc.font(), FontChoice::Inter);
    }
}
