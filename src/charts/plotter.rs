//! Chart Plotter Module
//! Interactive scatter and bubble charts using egui_plot.

use crate::charts::emphasis::{Emphasis, ViewFilter};
use crate::charts::format;
use crate::charts::scales::{palette_color, BubbleScale, ChartScales};
use crate::config::ChartSettings;
use crate::data::CountryRecord;
use egui::{Color32, RichText};
use egui_plot::{Plot, PlotPoint, PlotPoints, Points};

pub const X_AXIS_LABEL: &str = "Tourist Arrivals (millions)";
pub const Y_AXIS_LABEL: &str = "Tourism Expenditure (USD, billions)";

/// Extra pick distance around a dot, in screen points.
const HOVER_SLACK: f32 = 2.0;

/// The two chart tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Standard,
    Bubble,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Standard, ChartKind::Bubble];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Standard => "Standard Scatter Plot",
            ChartKind::Bubble => "Bubble Scatter Plot",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ChartKind::Standard => "Standard Scatter",
            ChartKind::Bubble => "Bubble Scatter",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ChartKind::Standard => "standard",
            ChartKind::Bubble => "bubble",
        }
    }
}

/// Everything both chart tabs draw from, prepared once per dataset load.
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Pipeline output order; color index follows this order.
    pub records: Vec<CountryRecord>,
    pub scales: ChartScales,
    pub bubble: BubbleScale,
    pub point_radius: f32,
    legend_order: Vec<usize>,
}

impl ChartData {
    pub fn new(records: Vec<CountryRecord>, settings: &ChartSettings) -> Self {
        let scales = ChartScales::from_records(&records);
        let bubble = BubbleScale::for_records(
            &records,
            settings.bubble_radius_min,
            settings.bubble_radius_max,
        );

        let mut legend_order: Vec<usize> = (0..records.len()).collect();
        legend_order.sort_by(|&a, &b| records[a].country.cmp(&records[b].country));

        Self {
            records,
            scales,
            bubble,
            point_radius: settings.point_radius,
            legend_order,
        }
    }

    pub fn radius(&self, kind: ChartKind, record: &CountryRecord) -> f32 {
        match kind {
            ChartKind::Standard => self.point_radius,
            ChartKind::Bubble => self.bubble.radius(record.tourism_expenditure),
        }
    }

    /// Record indices sorted by country name.
    pub fn legend_order(&self) -> &[usize] {
        &self.legend_order
    }

    /// Indices in draw order: dimmed first, highlighted last (on top).
    pub fn draw_order(&self, filter: &ViewFilter) -> Vec<(usize, Emphasis)> {
        let mut order: Vec<(usize, Emphasis)> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| (i, filter.emphasis(&r.country)))
            .collect();
        order.sort_by_key(|&(_, emphasis)| emphasis);
        order
    }
}

/// Creates the interactive charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Palette color for a record index.
    pub fn get_country_color(index: usize) -> Color32 {
        let (r, g, b) = palette_color(index);
        Color32::from_rgb(r, g, b)
    }

    fn emphasis_color(index: usize, emphasis: Emphasis) -> Color32 {
        let (r, g, b) = palette_color(index);
        let alpha = match emphasis {
            Emphasis::Dimmed => 40,
            Emphasis::Normal => 200,
            Emphasis::Highlighted => 255,
        };
        Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }

    /// Draw one chart tab. Returns the index of the hovered record, if any.
    pub fn draw_scatter(
        ui: &mut egui::Ui,
        data: &ChartData,
        kind: ChartKind,
        filter: &ViewFilter,
        height: f32,
        reset_zoom: bool,
    ) -> Option<usize> {
        let scales = &data.scales;

        let mut plot = Plot::new(format!("scatter_{}", kind.id()))
            .height(height)
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .show_x(false)
            .show_y(false)
            .include_x(scales.x_domain.start)
            .include_x(scales.x_domain.end)
            .include_y(scales.y_domain.start)
            .include_y(scales.y_domain.end)
            .x_axis_formatter(|mark, _range| format::arrivals_tick(mark.value))
            .y_axis_formatter(|mark, _range| format::expenditure_tick(mark.value));

        if reset_zoom {
            plot = plot.reset();
        }

        let response = plot.show(ui, |plot_ui| {
            let order = data.draw_order(filter);

            for &(idx, emphasis) in &order {
                let record = &data.records[idx];
                let mut radius = data.radius(kind, record);
                if emphasis == Emphasis::Highlighted {
                    radius *= 1.25;
                }

                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[
                        record.tourist_arrivals,
                        record.tourism_expenditure,
                    ]]))
                    .radius(radius)
                    .filled(true)
                    .highlight(emphasis == Emphasis::Highlighted)
                    .color(Self::emphasis_color(idx, emphasis)),
                );
            }

            // Topmost dot under the pointer wins.
            let pointer = plot_ui.pointer_coordinate()?;
            let pointer = plot_ui.screen_from_plot(pointer);
            order.iter().rev().find_map(|&(idx, _)| {
                let record = &data.records[idx];
                let center = plot_ui.screen_from_plot(PlotPoint::new(
                    record.tourist_arrivals,
                    record.tourism_expenditure,
                ));
                let reach = data.radius(kind, record) + HOVER_SLACK;
                (center.distance(pointer) <= reach).then_some(idx)
            })
        });

        if let Some(idx) = response.inner {
            let record = &data.records[idx];
            response
                .response
                .on_hover_ui_at_pointer(|ui| Self::draw_tooltip(ui, record));
        }

        response.inner
    }

    fn draw_tooltip(ui: &mut egui::Ui, record: &CountryRecord) {
        ui.label(RichText::new(&record.country).strong());
        ui.label(format!(
            "Arrivals: {} ({})",
            format::format_millions(record.tourist_arrivals),
            record.year
        ));
        ui.label(format!(
            "Expenditure: {} ({})",
            format::format_billions(record.tourism_expenditure),
            record.year
        ));
    }

    /// Draw the country legend. Clicking toggles selection; hover is reported
    /// to the filter so the chart can highlight the matching dot.
    pub fn draw_legend(ui: &mut egui::Ui, data: &ChartData, filter: &mut ViewFilter) {
        let mut hovered = None;
        let mut clicked = None;

        for &idx in data.legend_order() {
            let country = &data.records[idx].country;
            if !filter.legend_visible(country) {
                continue;
            }

            let is_selected = filter.selected() == Some(country.as_str());
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 3.0, Self::get_country_color(idx));

                let label = ui.selectable_label(is_selected, RichText::new(country).size(12.0));
                if label.clicked() {
                    clicked = Some(country.as_str());
                }
                if label.hovered() {
                    hovered = Some(country.as_str());
                }
            });
        }

        if let Some(country) = clicked {
            filter.toggle_selected(country);
        }
        filter.set_hovered(hovered);
    }
}
