//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by screen:
//! - `dashboard` - Header, hero, call-to-action, recent creations
//! - `editor` - Preview, property panel, suggestions, export row

mod dashboard;
mod editor;

use ratatui::Frame;

use crate::app::{App, Screen};

use dashboard::draw_dashboard;
use editor::draw_editor;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    match app.screen() {
        Screen::Dashboard => draw_dashboard(f, app, theme),
        Screen::Editor => draw_editor(f, app, theme),
    }
}
