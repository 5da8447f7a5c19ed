//! CSV Summarizer - CSV Table Viewer & Column Summarizer
//!
//! Loads a CSV file into a grid and sums a chosen column, overall and for
//! rows whose sub column contains a filter substring.

mod data;
mod gui;
mod state;
mod stats;

use anyhow::anyhow;
use eframe::egui;
use gui::SummarizerApp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,csv_summarizer=debug")),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Optional CSV file to open at startup
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 750.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("CSV Summarizer"),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Summarizer",
        options,
        Box::new(move |cc| Ok(Box::new(SummarizerApp::new(cc, initial_file)))),
    )
    .map_err(|e| anyhow!("failed to run application: {e}"))
}
