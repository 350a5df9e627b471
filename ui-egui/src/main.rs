// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use littlego_core::MAX_BOARD_SIZE;
use littlego_ui_egui::{BoardConfig, PlayApp};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "littlego-ui-egui")]
#[command(about = "Go board play view")]
struct Args {
    #[arg(long, default_value = "19", value_parser = clap::value_parser!(u8).range(2..=MAX_BOARD_SIZE as i64))]
    board_size: u8,

    #[arg(long, help = "Board appearance settings (JSON)")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, help = "Also log to the console")]
    debug: bool,
}

fn log_dir() -> PathBuf {
    match (std::env::consts::OS, dirs::home_dir()) {
        ("macos", Some(home)) => home.join("Library").join("Logs").join("littlego"),
        _ => PathBuf::from(".").join("logs"),
    }
}

/// Rotating file logs, copied to stderr when `console` is set. The handle
/// must stay alive for the whole run.
fn init_logging(level: &str, log_dir: &Path, console: bool) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let duplicate = if console { Duplicate::All } else { Duplicate::None };
    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("littlego")
                .suffix("log"),
        )
        .duplicate_to_stderr(duplicate)
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;
    Ok(handle)
}

/// Console-only logging for when the file logger could not start
fn init_console_logging(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize console logging: {}", e);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = match init_logging(&args.log_level, &log_dir(), args.debug) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            init_console_logging(&args.log_level);
            None
        }
    };

    let config = match &args.config {
        Some(path) => BoardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load board config from {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let style = config.to_style().context("Invalid board config")?;

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(720.0, 800.0)),
        centered: true,
        resizable: true,
        ..Default::default()
    };

    let board_size = args.board_size;
    eframe::run_native(
        "Little Go",
        options,
        Box::new(move |_cc| Box::new(PlayApp::new(board_size, style))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}
