//! Cartela - Terminal bingo cartela tracker
//!
//! Add cards by cartela number, mark numbers as they are called, and
//! reset everything for the next round. Cards and markings persist
//! across restarts.

// Module declarations
mod catalog;
mod config;
mod constants;
mod models;
mod storage;
mod store;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use catalog::CartelaCatalog;
use config::{Config, ThemeMode};
use constants::APP_NAME;
use storage::FileStorage;
use store::CardStore;

/// Cartela - Terminal bingo cartela tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to keep card data in (overrides the config file)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Forget all saved cards and exit
    #[arg(long)]
    clear_data: bool,

    /// Force a theme for this session
    #[arg(long, value_name = "THEME", value_parser = ["dark", "light"])]
    theme: Option<String>,
}

/// Routes tracing output to a log file inside the data directory.
///
/// The TUI owns stdout, so logs can't go there. Failures to set up the
/// log file are ignored; the app just runs without logging.
fn init_logging(data_dir: &std::path::Path) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }
    let Ok(log_file) = File::create(data_dir.join("cartela.log")) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file should not keep the app from starting
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}");
        Config::default()
    });
    if let Some(theme) = cli.theme.as_deref() {
        config.ui.theme_mode = match theme {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
    }

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.data_dir().context("Failed to resolve data directory")?,
    };
    init_logging(&data_dir);

    let storage = FileStorage::new(&data_dir);
    let catalog = CartelaCatalog::load_or_empty();
    let store = CardStore::load(catalog, Box::new(storage));

    if cli.clear_data {
        store.clear_saved();
        println!("{APP_NAME}: saved card data cleared.");
        return Ok(());
    }

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(store, config);

    // Run main TUI loop; restore the terminal before reporting errors
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    Ok(())
}
