//! CheatNotes - desktop cheat sheet for programming language commands
//!
//! Languages own categories, categories hold named commands with descriptions.
//! Both are kept as JSON documents in the data folder.

mod app;
mod core;
mod ui;

use app::CheatNotesApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;
use crate::core::state::AppState;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting CheatNotes...");

    let config = AppConfig::load_or_default();
    tracing::info!("Using data directory: {}", config.data_dir().display());

    let state = match AppState::open(config.store_paths()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to load stores: {}", e);
            ui::dialogs::show_error("Could not load CheatNotes data", &e.to_string());
            return Ok(());
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([640.0, 400.0])
            .with_title("CheatNotes"),
        ..Default::default()
    };

    eframe::run_native(
        "CheatNotes",
        native_options,
        Box::new(move |cc| Ok(Box::new(CheatNotesApp::new(cc, config, state)))),
    )
}
