mod app;
mod catalog;
mod config;
mod document;
mod editor;
mod palette;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Flow};
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "creato")]
#[command(about = "Terminal ad-creative editor: dashboard, live preview, property panel")]
#[command(version)]
struct Cli {
    /// Config file path [default: ~/.config/creato/config.toml]
    #[arg(long)]
    config: Option<String>,

    /// Theme preset, overrides the config file (slate, daylight, nord)
    #[arg(long)]
    theme: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the final document as JSON after quitting
    #[arg(long)]
    print_document: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let writer = match cli.log_file {
        Some(ref path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creato=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(cli.log_file.is_none()),
        )
        .init();

    // Load config
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().to_string_lossy().into_owned());
    let mut config = Config::load(&config_path)?;
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if cli.print_document {
        let json = serde_json::to_string_pretty(app.document())
            .context("Failed to serialize document")?;
        println!("{}", json);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == Flow::Quit {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}
