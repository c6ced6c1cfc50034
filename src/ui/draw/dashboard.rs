//! Dashboard drawing functions
//!
//! This module handles rendering the landing screen:
//! - Brand header
//! - Hero text and call-to-action buttons
//! - Recent creation cards
//! - Status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::RECENT_CREATIONS;
use crate::palette::Gradient;
use crate::ui::chip::{Chip, ChipFill};
use crate::ui::creation_card::CreationCard;
use crate::ui::layout::{centered, flow, Align, CardGrid};
use crate::ui::theme::Theme;

const HERO_TITLE: &str = "Create stunning retail media in seconds";
const HERO_TAGLINE: &str = "AI-powered creative editor designed for advertisers. \
     Generate, customize, and export beautiful ads effortlessly.";

/// Primary call-to-action, the only active button on this screen
const START_LABEL: &str = "+  Start with Template";
const UPLOAD_LABEL: &str = "▣  Upload Product";

/// Draw the dashboard
pub(crate) fn draw_dashboard(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let hints = if app.config().appearance.show_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1),
            Constraint::Length(4), // Hero
            Constraint::Length(1),
            Constraint::Length(3), // Call-to-action buttons
            Constraint::Length(1),
            Constraint::Min(1),        // Recent creations
            Constraint::Length(hints), // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0], theme);
    draw_hero(f, chunks[2], theme);
    draw_actions(f, chunks[4], theme);
    draw_recent(f, chunks[6], theme);
    if hints > 0 {
        draw_status_bar(f, chunks[7], theme);
    }
}

fn draw_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let logo_label = "✦";
    let logo = Rect::new(row.x + 2, row.y, Chip::width(logo_label).min(row.width - 2), 1);
    f.render_widget(
        Chip::new(logo_label, ChipFill::Gradient(Gradient::BRAND), theme.on_gradient),
        logo,
    );

    let brand = Paragraph::new(Span::styled(
        "CREATO AI",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ));
    let brand_area = Rect {
        x: logo.right() + 1,
        width: row.right().saturating_sub(logo.right() + 1),
        ..row
    };
    f.render_widget(brand, brand_area);

    // Inert
    let settings = Paragraph::new(Span::styled("Settings", Style::default().fg(theme.dimmed)))
        .alignment(Alignment::Right);
    let settings_area = Rect {
        width: row.width.saturating_sub(2),
        ..row
    };
    f.render_widget(settings, settings_area);
}

fn draw_hero(f: &mut Frame, area: Rect, theme: &Theme) {
    let hero = Paragraph::new(vec![
        Line::styled(
            HERO_TITLE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(HERO_TAGLINE, Style::default().fg(theme.dimmed)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(hero, centered(area, 72, area.height));
}

fn draw_actions(f: &mut Frame, area: Rect, theme: &Theme) {
    let widths = [Chip::width(START_LABEL) + 4, Chip::width(UPLOAD_LABEL) + 4];
    let rects = flow(area, &widths, 2, area.height, Align::Center);

    if let Some(&rect) = rects.first() {
        let start = Chip::new(START_LABEL, ChipFill::Gradient(Gradient::BRAND), theme.on_gradient)
            .bold(true);
        f.render_widget(start, rect);
    }
    if let Some(&rect) = rects.get(1) {
        let upload = Chip::new(UPLOAD_LABEL, ChipFill::Solid(theme.surface_alt), theme.foreground)
            .bold(true);
        f.render_widget(upload, rect);
    }
}

fn draw_recent(f: &mut Frame, area: Rect, theme: &Theme) {
    if area.height == 0 || area.width < 4 {
        return;
    }

    let title = Paragraph::new(Span::styled(
        "Recent Creations",
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, Rect::new(area.x + 2, area.y, area.width - 2, 1));

    let cards_area = Rect {
        x: area.x + 2,
        y: area.y + 2,
        width: area.width - 4,
        height: area.height.saturating_sub(2),
    };
    let grid = CardGrid::for_width(area.width);
    let cells = grid.cells(cards_area, RECENT_CREATIONS.len(), CreationCard::HEIGHT);
    for (creation, cell) in RECENT_CREATIONS.iter().zip(cells) {
        f.render_widget(CreationCard::new(creation, theme), cell);
    }
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let status = " Enter: start with template | q: quit";
    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}
