//! Tourism Explorer - Tourist arrivals vs. tourism expenditure
//!
//! Reduces the UN tourism CSV to one latest-complete-year record per country
//! and shows it as a standard scatter plot and a bubble plot.

mod charts;
mod config;
mod data;
mod gui;
mod logging;

use eframe::egui;
use gui::TourismApp;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let settings = config::AppSettings::load()?;
    info!(csv = %settings.csv_path.display(), "Starting Tourism Explorer");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("Tourism Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Tourism Explorer",
        options,
        Box::new(move |cc| Ok(Box::new(TourismApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start UI: {}", e))
}
