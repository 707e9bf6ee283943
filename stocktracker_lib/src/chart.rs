//! Close-price line chart rendered to PNG with plotters.

use std::ops::Range;
use std::path::Path;

use chrono::NaiveDate;
use plotters::prelude::*;

use crate::error::TrackerError;

/// 10 x 5 inches at 100 px per inch.
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 500;

pub const X_AXIS_LABEL: &str = "Record Number (chronological)";
pub const Y_AXIS_LABEL: &str = "Close Price";

const GRID_ALPHA: f64 = 0.6;
const GRID_DIVISIONS: usize = 10;
const LINE_WIDTH: u32 = 2;

pub fn chart_title(day: NaiveDate, ticker: &str) -> String {
    format!("Close Prices on {} for {}", day, ticker)
}

/// X spans the record indices; an empty or single-point series still gets a unit axis.
pub fn x_range(len: usize) -> Range<f64> {
    0.0..(len.saturating_sub(1).max(1) as f64)
}

/// Y spans the closes padded by 10% of their range.
pub fn y_range(closes: &[f64]) -> Range<f64> {
    let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let padding = if span > 0.0 {
        span * 0.1
    } else {
        (max.abs() * 0.01).max(0.5)
    };
    (min - padding)..(max + padding)
}

fn grid_positions(range: &Range<f64>) -> Vec<f64> {
    let step = (range.end - range.start) / GRID_DIVISIONS as f64;
    (0..=GRID_DIVISIONS)
        .map(|i| range.start + step * i as f64)
        .collect()
}

/// Draws `closes` as a solid blue line and writes the PNG to `path`,
/// replacing any existing file.
pub fn render_close_chart(
    path: &Path,
    ticker: &str,
    day: NaiveDate,
    closes: &[f64],
) -> Result<(), TrackerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let xs = x_range(closes.len());
    let ys = y_range(closes);

    {
        let backend = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| TrackerError::Chart(format!("Failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(chart_title(day, ticker), ("sans-serif", 28.0).into_font())
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(xs.clone(), ys.clone())
            .map_err(|e| TrackerError::Chart(format!("Failed to build chart: {}", e)))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(|e| TrackerError::Chart(format!("Failed to draw axes: {}", e)))?;

        let grid_style = BLACK.mix(GRID_ALPHA).stroke_width(1);
        for x in grid_positions(&xs) {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x, ys.start), (x, ys.end)],
                    6,
                    4,
                    grid_style,
                ))
                .map_err(|e| TrackerError::Chart(format!("Failed to draw grid: {}", e)))?;
        }
        for y in grid_positions(&ys) {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(xs.start, y), (xs.end, y)],
                    6,
                    4,
                    grid_style,
                ))
                .map_err(|e| TrackerError::Chart(format!("Failed to draw grid: {}", e)))?;
        }

        chart
            .draw_series(LineSeries::new(
                closes.iter().enumerate().map(|(i, c)| (i as f64, *c)),
                BLUE.stroke_width(LINE_WIDTH),
            ))
            .map_err(|e| TrackerError::Chart(format!("Failed to draw line: {}", e)))?;

        root.present()
            .map_err(|e| TrackerError::Chart(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    tracing::info!("Wrote {} close prices to {}", closes.len(), path.display());
    Ok(())
}
