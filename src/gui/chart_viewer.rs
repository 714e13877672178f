//! Chart Viewer Widget
//! Central panel with the Standard / Bubble tabs and the active chart.

use crate::charts::{ChartData, ChartKind, ChartPlotter, ViewFilter};
use crate::config::ChartSettings;
use crate::data::CountryRecord;
use egui::RichText;

/// Tabbed chart display. Each tab keeps its own search and selection.
#[derive(Default)]
pub struct ChartViewer {
    pub chart_data: Option<ChartData>,
    pub active: ChartKind,
    standard_filter: ViewFilter,
    bubble_filter: ViewFilter,
    reset_zoom: bool,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset; selections of countries that disappeared are cleared.
    pub fn set_records(&mut self, records: Vec<CountryRecord>, settings: &ChartSettings) {
        let data = ChartData::new(records, settings);
        for kind in ChartKind::ALL {
            let countries = data.records.iter().map(|r| r.country.as_str());
            self.filter_mut(kind).retain_selection(countries);
        }
        self.chart_data = Some(data);
        self.reset_zoom = true;
    }

    pub fn filter(&self, kind: ChartKind) -> &ViewFilter {
        match kind {
            ChartKind::Standard => &self.standard_filter,
            ChartKind::Bubble => &self.bubble_filter,
        }
    }

    pub fn filter_mut(&mut self, kind: ChartKind) -> &mut ViewFilter {
        match kind {
            ChartKind::Standard => &mut self.standard_filter,
            ChartKind::Bubble => &mut self.bubble_filter,
        }
    }

    /// Active tab's data and filter, borrowed together for the legend.
    pub fn legend_parts(&mut self) -> Option<(&ChartData, &mut ViewFilter)> {
        let filter = match self.active {
            ChartKind::Standard => &mut self.standard_filter,
            ChartKind::Bubble => &mut self.bubble_filter,
        };
        self.chart_data.as_ref().map(|data| (data, filter))
    }

    /// Filters for every tab, used by the PNG export.
    pub fn filters(&self) -> Vec<(ChartKind, ViewFilter)> {
        ChartKind::ALL
            .iter()
            .map(|&kind| (kind, self.filter(kind).clone()))
            .collect()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, height: f32) {
        ui.horizontal(|ui| {
            for kind in ChartKind::ALL {
                if ui
                    .selectable_label(
                        self.active == kind,
                        RichText::new(kind.tab_label()).size(15.0),
                    )
                    .clicked()
                    && self.active != kind
                {
                    self.active = kind;
                    self.reset_zoom = true;
                }
            }
        });
        ui.separator();

        let Some(data) = &self.chart_data else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(self.active.title()).size(18.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset Zoom").clicked() {
                    self.reset_zoom = true;
                }
            });
        });
        ui.add_space(6.0);

        let filter = match self.active {
            ChartKind::Standard => &self.standard_filter,
            ChartKind::Bubble => &self.bubble_filter,
        };
        let reset = std::mem::take(&mut self.reset_zoom);
        ChartPlotter::draw_scatter(ui, data, self.active, filter, height, reset);
    }
}
