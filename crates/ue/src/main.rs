use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ue_config::AppConfig;
use ue_core::{Editor, EditorOptions};
use ue_tui::FallbackSize;

/// A tiny ANSI terminal text editor.
#[derive(Parser, Debug)]
#[command(name = "ue", version, about)]
struct Cli {
    /// File to edit; created on the first save if it doesn't exist.
    file: PathBuf,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append log output to this file (the terminal is busy with the editor).
    #[arg(long)]
    log: Option<PathBuf>,

    /// Maximum document size in bytes.
    #[arg(long)]
    capacity: Option<usize>,

    /// Number of undo levels.
    #[arg(long = "undo-levels")]
    undo_levels: Option<usize>,

    /// Tab stop width.
    #[arg(long = "tab-size")]
    tab_size: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log.as_deref()) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing into the log file, or discards output without one.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match path {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli);
    tracing::info!(file = %cli.file.display(), ?config, "starting ue");

    let mut editor = Editor::open(&cli.file, &editor_options(&config))?;
    ue_tui::run(
        &mut editor,
        FallbackSize {
            width: config.fallback_width,
            height: config.fallback_height,
        },
    )
}

/// Loads the config file and applies command-line overrides.
fn resolve_config(cli: &Cli) -> AppConfig {
    let path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_or_create(&path);

    if let Some(capacity) = cli.capacity {
        config.buffer_capacity = capacity;
    }
    if let Some(levels) = cli.undo_levels {
        config.undo_levels = levels;
    }
    if let Some(tab_size) = cli.tab_size {
        config.tab_size = tab_size;
    }
    config.sanitize();
    config
}

fn editor_options(config: &AppConfig) -> EditorOptions {
    EditorOptions {
        capacity: config.buffer_capacity,
        undo_levels: config.undo_levels,
        tab_size: config.tab_size,
    }
}
