// MedConnect - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Favorites store selection and restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use medconnect::app;
pub use medconnect::core;
pub use medconnect::platform;
pub use medconnect::ui;
pub use medconnect::util;

use app::favorites::Favorites;
use app::source::{CatalogSource, Latency, SourceWorker};
use clap::Parser;
use platform::storage::{FileStore, KeyValueStore, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;

/// MedConnect - find, filter and bookmark doctors.
#[derive(Parser, Debug)]
#[command(name = "MedConnect", version, about)]
struct Cli {
    /// Directory holding the favorites store (defaults to the platform data dir).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory only; nothing is written to disk.
    #[arg(long = "no-persist")]
    no_persist: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take effect; warnings
    // are replayed once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "MedConnect starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    // Favorites store: --no-persist > --data-dir > platform default.
    let store: Box<dyn KeyValueStore> = if cli.no_persist {
        tracing::info!("Favorites will not be persisted");
        Box::new(MemoryStore::new())
    } else {
        let data_dir = cli
            .data_dir
            .as_deref()
            .unwrap_or(&platform_paths.data_dir);
        let file_store = FileStore::open(platform::storage::storage_path(data_dir));
        tracing::info!(path = %file_store.path().display(), "Favorites store opened");
        Box::new(file_store)
    };
    let favorites = Favorites::load(store);

    let latency = Latency {
        fetch: config.fetch_latency,
        search: config.search_latency,
    };
    let worker = SourceWorker::new(Arc::new(CatalogSource::new(latency)));
    let state = app::state::AppState::new(favorites, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::MedConnectApp::new(state, worker)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch MedConnect GUI: {e}");
        std::process::exit(1);
    }
}
