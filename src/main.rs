//! Emberfall - A turn-based console adventure
//!
//! This is the main entry point for the game.

mod console;
mod menu;
mod save;
mod settings;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use emberfall_core::FileEventLog;
use emberfall_game::{starter_items, CharacterStats, GameSession};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use console::{Console, SessionEnd};
use settings::GameSettings;

fn main() -> Result<ExitCode> {
    // Initialize logging; stdout belongs to the game itself
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting Emberfall...");

    let settings = GameSettings::load();
    let log_path = save::event_log_path(&settings.files);
    let log = FileEventLog::open(&log_path)
        .with_context(|| format!("Failed to open event log {:?}", log_path))?;
    info!("Event log: {}", log.path().display());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let Some(name) = console.ask_name() else {
        info!("No character name given, exiting");
        return Ok(ExitCode::SUCCESS);
    };

    let stats = CharacterStats::from(settings.player.starting_stats());
    let mut session = GameSession::new(name, stats, log);
    if settings.player.starter_items {
        for item in starter_items() {
            session.add_item(item);
        }
    }

    let end = console::play(&mut console, &mut session, &settings.files)?;
    info!("Session ended: {:?}", end);

    match end {
        SessionEnd::Quit => Ok(ExitCode::SUCCESS),
        SessionEnd::Defeated => Ok(ExitCode::from(1)),
    }
}
