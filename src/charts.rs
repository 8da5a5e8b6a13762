//! PNG charts of the dashboard tables: daily totals and hourly averages as
//! lines, seasonal totals as bars.
//!
//! Captions and axis labels are only drawn with the `chart-labels` feature
//! (plotters' `ttf` backend, which needs system fonts). Without it the charts
//! carry no text at all.

use anyhow::{Result, anyhow};
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analyzers::types::{DailySummary, HourlySummary, SeasonSummary};
use crate::dashboard::Dashboard;

const SIZE: (u32, u32) = (1600, 800);
const LABELS: bool = cfg!(feature = "chart-labels");
const CAPTION_FONT: (&str, u32) = ("sans-serif", 40);

const DAILY_COLOR: RGBColor = RGBColor(0x90, 0xCA, 0xF9);
const HOURLY_COLOR: RGBColor = RGBColor(0xFF, 0xA7, 0x26);
const SEASON_COLOR: RGBColor = RGBColor(0x42, 0x7A, 0xB5);

fn plot_err(e: impl Display) -> anyhow::Error {
    anyhow!("chart rendering failed: {e}")
}

/// Headroom above the tallest value so the top point is not clipped.
fn y_max(max: f64) -> f64 {
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

/// Line chart of `total_rentals` per date.
pub fn render_daily(path: &Path, rows: &[DailySummary]) -> Result<()> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let max_x = rows.len().saturating_sub(1).max(1) as f64;
    let max_y = y_max(rows.iter().map(|r| r.total_rentals).max().unwrap_or(0) as f64);

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if LABELS {
        builder
            .caption("Total Rentals per Day", CAPTION_FONT)
            .x_label_area_size(50)
            .y_label_area_size(80);
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..max_x, 0f64..max_y)
        .map_err(plot_err)?;

    let date_label = |x: &f64| {
        rows.get(x.round() as usize)
            .map(|r| r.date.to_string())
            .unwrap_or_default()
    };
    let mut mesh = chart.configure_mesh();
    if LABELS {
        mesh.x_desc("Date")
            .y_desc("Total Rentals")
            .x_label_formatter(&date_label);
    } else {
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw().map_err(plot_err)?;

    let points = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.total_rentals as f64));
    chart
        .draw_series(LineSeries::new(points, &DAILY_COLOR))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), points = rows.len(), "Daily chart rendered");
    Ok(())
}

/// Line chart of `avg_rentals` per hour of day.
pub fn render_hourly(path: &Path, rows: &[HourlySummary]) -> Result<()> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let max_y = y_max(rows.iter().map(|r| r.avg_rentals).fold(0.0, f64::max));

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if LABELS {
        builder
            .caption("Average Rentals per Hour", CAPTION_FONT)
            .x_label_area_size(50)
            .y_label_area_size(80);
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..23f64, 0f64..max_y)
        .map_err(plot_err)?;

    let hour_label = |x: &f64| format!("{:.0}", x);
    let mut mesh = chart.configure_mesh();
    if LABELS {
        mesh.x_desc("Hour")
            .y_desc("Average Rentals")
            .x_labels(24)
            .x_label_formatter(&hour_label);
    } else {
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw().map_err(plot_err)?;

    let points = rows.iter().map(|r| (f64::from(r.hour), r.avg_rentals));
    chart
        .draw_series(LineSeries::new(points, &HOURLY_COLOR))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), points = rows.len(), "Hourly chart rendered");
    Ok(())
}

/// Bar chart of `total_rentals` per season.
pub fn render_seasons(path: &Path, rows: &[SeasonSummary]) -> Result<()> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let buckets = rows.len().max(1) as u32;
    let max_y = y_max(rows.iter().map(|r| r.total_rentals).max().unwrap_or(0) as f64) as u64;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if LABELS {
        builder
            .caption("Rentals by Season", CAPTION_FONT)
            .x_label_area_size(50)
            .y_label_area_size(80);
    }
    let mut chart = builder
        .build_cartesian_2d((0u32..buckets).into_segmented(), 0u64..max_y.max(1))
        .map_err(plot_err)?;

    let season_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => rows
            .get(*i as usize)
            .map(|r| r.season_name().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh();
    if LABELS {
        mesh.x_desc("Season")
            .y_desc("Total Rentals")
            .x_label_formatter(&season_label);
    } else {
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw().map_err(plot_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(SEASON_COLOR.filled())
                .margin(20)
                .data(
                    rows.iter()
                        .enumerate()
                        .map(|(i, r)| (i as u32, r.total_rentals)),
                ),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), bars = rows.len(), "Season chart rendered");
    Ok(())
}

/// Renders `daily_rentals.png`, `hourly_rentals.png` and `season_rentals.png`
/// into `dir`, returning the written paths.
#[tracing::instrument(skip(dashboard))]
pub fn render_dashboard(dashboard: &Dashboard, dir: &Path) -> Result<Vec<PathBuf>> {
    let daily = dir.join("daily_rentals.png");
    let hourly = dir.join("hourly_rentals.png");
    let seasons = dir.join("season_rentals.png");

    render_daily(&daily, &dashboard.filtered_daily)?;
    render_hourly(&hourly, &dashboard.hourly)?;
    render_seasons(&seasons, &dashboard.seasons)?;

    Ok(vec![daily, hourly, seasons])
}
