//! CRM TUI - record creation dialogs for a family-office CRM
//!
//! A Ratatui-based TUI for browsing companies, people, entities,
//! opportunities, notes and files, and for creating them through
//! configuration-driven two-step dialogs.

mod app;
mod config;
mod entities;
mod platform;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use config::CrmConfig;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::TerminalGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let config = CrmConfig::load().unwrap_or_else(|err| {
        eprintln!("Ignoring unreadable config: {err}");
        CrmConfig::default()
    });

    // Initialize logging; stderr would draw over the alternate screen
    let (writer, log_file) = log_writer();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    if let Some(path) = log_file {
        tracing::info!("Logging to {}", path.display());
    }

    let mut app = App::new(config).await?;

    let result = {
        let mut guard = TerminalGuard::enter()?;
        run_app(guard.terminal(), &mut app).await
    };

    // Remember the last viewed kind for the next start
    let mut config = app.config.clone();
    config.default_kind = Some(app.state.selected_kind);
    if let Err(err) = config.save() {
        tracing::warn!("Failed to save config: {err}");
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log file writer, or a sink when no log file can be opened
fn log_writer() -> (BoxMakeWriter, Option<PathBuf>) {
    let Some(path) = config::log_path() else {
        return (BoxMakeWriter::new(io::sink), None);
    };
    match config::open_log_file(&path) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        Err(err) => {
            eprintln!("Logging disabled, cannot open {}: {err}", path.display());
            (BoxMakeWriter::new(io::sink), None)
        }
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
