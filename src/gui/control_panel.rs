//! Control Panel Widget
//! Left side panel: data source, search, legend, export and status.

use crate::charts::ChartPlotter;
use crate::gui::ChartViewer;
use egui::{Color32, RichText, ScrollArea};
use std::path::Path;

/// Left side control panel.
pub struct ControlPanel {
    pub status: String,
    pub is_error: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            is_error: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        viewer: &mut ChartViewer,
        csv_path: &Path,
        busy: bool,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌍 Tourism Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Arrivals vs. expenditure, latest complete year")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let file_name = csv_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(file_name).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!busy, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                            if ui.button("⟳").on_hover_text("Reload").clicked() {
                                action = ControlPanelAction::Reload;
                            }
                        });
                    });
                });
            });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Search & Legend Section =====
        let kind = viewer.active;
        ui.label(
            RichText::new(format!("🔎 Countries ({})", kind.tab_label()))
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);

        {
            let filter = viewer.filter_mut(kind);
            ui.add(
                egui::TextEdit::singleline(filter.search_mut())
                    .hint_text("Search countries...")
                    .desired_width(f32::INFINITY),
            );
        }

        if let Some(selected) = viewer.filter(kind).selected() {
            ui.label(
                RichText::new(format!("Selected: {} (click again to clear)", selected))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
        ui.add_space(5.0);

        if let Some((data, filter)) = viewer.legend_parts() {
            ScrollArea::vertical()
                .max_height((ui.available_height() - 140.0).max(120.0))
                .show(ui, |ui| {
                    ChartPlotter::draw_legend(ui, data, filter);
                });
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(viewer.chart_data.is_some() && !busy, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(10.0);

        // ===== Status Section =====
        if busy {
            ui.add(egui::ProgressBar::new(0.5).animate(true));
        }
        let status_color = if self.is_error {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: &str) {
        self.status = format!("Error: {}", status);
        self.is_error = true;
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Reload,
    ExportPng,
}
