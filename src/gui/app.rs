//! Tourism Explorer Main Application
//! Main window with control panel and chart viewer.

use crate::charts::format::format_count;
use crate::charts::StaticChartRenderer;
use crate::config::AppSettings;
use crate::data::{self, Dataset};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info, warn};

/// Pipeline result from background thread
enum LoadResult {
    Complete { dataset: Dataset, path: PathBuf },
    Error(String),
}

/// Main application window.
pub struct TourismApp {
    settings: AppSettings,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl TourismApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let mut app = Self {
            settings,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_load();
        app
    }

    /// Run the whole pipeline from scratch on a background thread.
    fn start_load(&mut self) {
        if self.is_loading {
            return;
        }

        let path = self.settings.csv_path.clone();
        self.control_panel
            .set_status(&format!("Loading {}...", path.display()));
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match data::load_dataset(&path) {
                Ok(dataset) => LoadResult::Complete { dataset, path },
                Err(e) => {
                    error!(path = %path.display(), "Failed to load CSV data: {}", e);
                    LoadResult::Error(e.to_string())
                }
            };
            let _ = tx.send(result);
        });
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.settings.csv_path = path;
            self.start_load();
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { dataset, path }) => {
                let report = &dataset.report;
                let status = format!(
                    "Loaded {} countries from {} rows ({} skipped)",
                    format_count(dataset.records.len()),
                    format_count(report.rows_read),
                    format_count(report.rejected_total()),
                );
                info!(path = %path.display(), "{}", status);
                self.control_panel.set_status(&status);
                self.chart_viewer
                    .set_records(dataset.records, &self.settings.chart);
                self.is_loading = false;
            }
            Ok(LoadResult::Error(message)) => {
                self.control_panel.set_error(&message);
                self.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.control_panel.set_error("Loader thread stopped unexpectedly");
                self.is_loading = false;
            }
        }
    }

    /// Render both charts to PNG in a chosen folder, then open it.
    fn handle_export_png(&mut self) {
        let Some(chart_data) = &self.chart_viewer.chart_data else {
            self.control_panel.set_status("No charts to export");
            return;
        };

        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };

        let export = &self.settings.export;
        match StaticChartRenderer::export_charts_as_png(
            chart_data,
            &self.chart_viewer.filters(),
            &dir,
            export.width,
            export.height,
        ) {
            Ok(paths) => {
                self.control_panel.set_status(&format!(
                    "Exported {} charts to {}",
                    paths.len(),
                    dir.display()
                ));
                if let Err(e) = open::that(&dir) {
                    warn!(dir = %dir.display(), "Could not open export folder: {}", e);
                }
            }
            Err(e) => {
                error!("PNG export failed: {:#}", e);
                self.control_panel.set_error(&format!("{:#}", e));
            }
        }
    }
}

impl eframe::App for TourismApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(
                    ui,
                    &mut self.chart_viewer,
                    &self.settings.csv_path,
                    self.is_loading,
                );

                match action {
                    ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                    ControlPanelAction::Reload => self.start_load(),
                    ControlPanelAction::ExportPng => self.handle_export_png(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        let height = self.settings.chart.height;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, height);
        });
    }
}
