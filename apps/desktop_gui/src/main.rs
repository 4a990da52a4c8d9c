//! Desktop companion for the Encore fan site.
//!
//! The UI thread owns an [`eframe`] app and talks to a backend worker
//! thread over bounded channels; the worker owns the tokio runtime and
//! the HTTP client.

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use crate::ui::app::{FanSiteApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "encore-gui", about = "Desktop browser for the Encore fan site")]
struct Args {
    /// Origin of the fan site server, e.g. http://127.0.0.1:5000
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    origin: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = StartupConfig {
        origin: args.origin,
    };

    // Commands are scarce (one per user action); replies can burst when
    // several fetches resolve together.
    let (cmd_tx, cmd_rx) = bounded(256);
    let (ui_tx, ui_rx) = bounded(2048);

    backend_bridge::runtime::launch(config.origin.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Encore"),
        ..Default::default()
    };
    eframe::run_native(
        "Encore",
        options,
        Box::new(move |_cc| Ok(Box::new(FanSiteApp::new(config, cmd_tx, ui_rx)))),
    )
}
