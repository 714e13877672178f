//! Static Chart Renderer
//! Renders the scatter and bubble charts to PNG with plotters.
//!
//! Layout matches the interactive view: shared axis domains, Tableau10
//! colors in dataset order, highlighted dots drawn on top.

use crate::charts::emphasis::{Emphasis, ViewFilter};
use crate::charts::format;
use crate::charts::plotter::{ChartData, ChartKind, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::charts::scales::palette_color;
use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use rayon::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Pixel buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

fn draw_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one chart into in-memory PNG bytes.
    pub fn render_chart_to_bytes(
        data: &ChartData,
        kind: ChartKind,
        filter: &ViewFilter,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw_chart(&root, data, kind, filter)?;
            root.present().map_err(draw_err)?;
        }

        let image =
            RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer(width, height))?;
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    fn draw_chart<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
        kind: ChartKind,
        filter: &ViewFilter,
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(kind.title(), ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(data.scales.x_domain.clone(), data.scales.y_domain.clone())
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(5)
            .y_labels(5)
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .x_label_formatter(&|v| format::arrivals_tick(*v))
            .y_label_formatter(&|v| format::expenditure_tick(*v))
            .draw()
            .map_err(draw_err)?;

        let order = data.draw_order(filter);
        chart
            .draw_series(order.iter().map(|&(idx, emphasis)| {
                let record = &data.records[idx];
                let (r, g, b) = palette_color(idx);
                let alpha = match emphasis {
                    Emphasis::Dimmed => 0.15,
                    Emphasis::Normal => 0.8,
                    Emphasis::Highlighted => 1.0,
                };
                let radius = data.radius(kind, record).round() as i32;
                Circle::new(
                    (record.tourist_arrivals, record.tourism_expenditure),
                    radius,
                    RGBColor(r, g, b).mix(alpha).filled(),
                )
            }))
            .map_err(draw_err)?;

        Ok(())
    }

    /// File name for an exported chart, e.g. `tourism_bubble.png`.
    pub fn export_file_name(kind: ChartKind) -> String {
        format!("tourism_{}.png", kind.id())
    }

    /// Render both charts in parallel and write them into `dir`.
    pub fn export_charts_as_png(
        data: &ChartData,
        filters: &[(ChartKind, ViewFilter)],
        dir: &Path,
        width: u32,
        height: u32,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export folder: {:?}", dir))?;

        let rendered: Vec<(ChartKind, Vec<u8>)> = filters
            .par_iter()
            .map(|(kind, filter)| {
                Self::render_chart_to_bytes(data, *kind, filter, width, height)
                    .map(|png| (*kind, png))
            })
            .collect::<Result<_, RenderError>>()?;

        let mut paths = Vec::with_capacity(rendered.len());
        for (kind, png) in rendered {
            let path = dir.join(Self::export_file_name(kind));
            fs::write(&path, png).with_context(|| format!("Failed to write {:?}", path))?;
            info!(path = %path.display(), "Exported chart");
            paths.push(path);
        }

        Ok(paths)
    }
}
