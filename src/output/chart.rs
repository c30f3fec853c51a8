//! SVG line charts of peak contact pressure.
//!
//! One chart per contact pair, x axis = step, y axis = pressure. The stacked
//! variant draws every pair's chart into a single document, one panel per
//! pair from top to bottom.

use super::prepare_output_path;
use crate::parser::PairId;
use crate::series::{Series, SeriesSet};
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::OutputError;
use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Chart dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    /// Height of a single pair's chart; stacked documents multiply it
    pub height_per_chart: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height_per_chart: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height_per_chart(mut self, height: u32) -> Self {
        self.height_per_chart = height;
        self
    }
}

/// File name used for a pair's standalone chart
pub fn chart_file_name(pair_id: PairId) -> String {
    format!("pair_{}_contact_pressure_plot.svg", pair_id)
}

fn chart_title(pair_id: PairId) -> String {
    format!("Pair {} Contact Pressure Plot", pair_id)
}

/// Render one pair's chart to an SVG file
///
/// **Public** - main entry point for a single chart
///
/// An empty series yields an empty chart rather than an error.
pub fn render_pair_chart(
    series: &Series,
    output_path: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    prepare_output_path(output_path)?;

    {
        let size = (config.width, config.height_per_chart);
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_pair_chart(&root, series)?;
        root.present().map_err(chart_error)?;
    }

    info!("Chart for pair {} written to: {}", series.pair_id, output_path.display());
    Ok(())
}

/// Render every pair's chart into `output_dir`, one file per pair
///
/// # Returns
/// Paths of the written files, in series order
pub fn render_pair_charts(
    set: &SeriesSet,
    output_dir: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<Vec<PathBuf>, OutputError> {
    let output_dir = output_dir.as_ref();

    set.iter()
        .map(|series| {
            let path = output_dir.join(chart_file_name(series.pair_id));
            render_pair_chart(series, &path, config).map(|()| path)
        })
        .collect()
}

/// Render every pair's chart stacked vertically in one SVG file
///
/// # Returns
/// False (and nothing written) when the set holds no series
pub fn render_stacked_chart(
    set: &SeriesSet,
    output_path: impl AsRef<Path>,
    config: &ChartConfig,
) -> Result<bool, OutputError> {
    let output_path = output_path.as_ref();

    if set.is_empty() {
        warn!("No contact pairs to chart, skipping {}", output_path.display());
        return Ok(false);
    }

    prepare_output_path(output_path)?;

    let panel_count = set.len();
    {
        let total_height = config.height_per_chart.saturating_mul(panel_count as u32);
        let root = SVGBackend::new(output_path, (config.width, total_height)).into_drawing_area();
        let panels = root.split_evenly((panel_count, 1));

        for (panel, series) in panels.iter().zip(set.iter()) {
            draw_pair_chart(panel, series)?;
        }
        root.present().map_err(chart_error)?;
    }

    info!(
        "Stacked chart with {} pairs written to: {}",
        panel_count,
        output_path.display()
    );
    Ok(true)
}

fn draw_pair_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    series: &Series,
) -> Result<(), OutputError> {
    area.fill(&WHITE).map_err(chart_error)?;

    let (x_range, y_range) = axis_ranges(series);

    let mut chart = ChartBuilder::on(area)
        .caption(chart_title(series.pair_id), ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Max Contact Pressure")
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(
            series.points().map(|(step, pressure)| (step as f64, pressure)),
            BLUE.stroke_width(2),
        ))
        .map_err(chart_error)?;

    chart
        .draw_series(
            series
                .points()
                .map(|(step, pressure)| Circle::new((step as f64, pressure), 3, BLUE.filled())),
        )
        .map_err(chart_error)?;

    Ok(())
}

/// Axis ranges with a little headroom; degenerate ranges are widened
fn axis_ranges(series: &Series) -> (Range<f64>, Range<f64>) {
    let last_step = series.points().map(|(step, _)| step).max().unwrap_or(1);
    let x_range = 0.0..(last_step as f64 + 1.0);

    let (low, high) = series
        .points()
        .fold(None, |acc: Option<(f64, f64)>, (_, p)| match acc {
            Some((low, high)) => Some((low.min(p), high.max(p))),
            None => Some((p, p)),
        })
        .unwrap_or((0.0, 1.0));

    let span = high - low;
    let pad = if span > 0.0 { span * 0.1 } else { high.abs().max(1.0) * 0.1 };

    (x_range, (low - pad)..(high + pad))
}

fn chart_error<E: std::fmt::Display>(err: E) -> OutputError {
    OutputError::ChartFailed(err.to_string())
}
