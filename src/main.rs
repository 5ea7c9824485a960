mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::ReviewBrowserApp;
use config::Config;
use data::loader::load_review_tables;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    // No window opens unless every table loads.
    let tables = load_review_tables(&config)
        .inspect_err(|e| log::error!("Failed to load tables: {e}"))
        .context("loading review tables")?;
    let state = AppState::new(tables, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Clinical Trial Eligibility Parsing – Scoping Review",
        options,
        Box::new(|_cc| Ok(Box::new(ReviewBrowserApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
