//! Output formatting and persistence for dashboard summaries.
//!
//! Supports a plain-text report, JSON serialization, and CSV export.

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fmt::{self, Debug};
use std::fs::File;
use std::io::Write;
use tracing::debug;

use crate::dashboard::Dashboard;

/// Logs any value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Serializes the dashboard as pretty-printed JSON.
pub fn to_json(dashboard: &Dashboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(dashboard)?)
}

/// Writes `rows` to `path` as CSV with a header row.
///
/// With `gzip` the file is compressed and `.gz` is appended to `path`.
/// Returns the path actually written.
pub fn write_csv<T: Serialize>(path: &str, rows: &[T], gzip: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let body = writer.into_inner().map_err(|e| e.into_error())?;

    let (body, path) = if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&body)?;
        (encoder.finish()?, format!("{path}.gz"))
    } else {
        (body, path.to_string())
    };

    debug!(path = %path, rows = rows.len(), gzip, "Writing CSV");
    let mut file = File::create(&path)?;
    file.write_all(&body)?;
    file.flush()?;

    Ok(path)
}

/// Renders the dashboard as a plain-text report.
pub fn render_report(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_report(&mut out, dashboard).ok();
    out
}

fn write_report(out: &mut impl fmt::Write, dashboard: &Dashboard) -> fmt::Result {
    writeln!(out, "Bike Rental Dashboard")?;
    match dashboard.range {
        Some(r) => writeln!(out, "Date range: {} to {}", r.start, r.end)?,
        None => writeln!(out, "Date range: (no data)")?,
    }

    let m = &dashboard.metrics;
    writeln!(out, "\nDaily Rental Totals")?;
    writeln!(out, "  Total Rentals:          {}", m.total_rentals)?;
    writeln!(out, "  Total Registered Users: {}", m.registered_users)?;
    writeln!(out, "  Total Casual Users:     {}", m.casual_users)?;

    writeln!(
        out,
        "\n{:<12} {:>14} {:>12} {:>8}",
        "date", "total_rentals", "registered", "casual"
    )?;
    for row in &dashboard.filtered_daily {
        writeln!(
            out,
            "{:<12} {:>14} {:>12} {:>8}",
            row.date.to_string(),
            row.total_rentals,
            row.registered_users,
            row.casual_users
        )?;
    }

    writeln!(out, "\nAverage Rentals per Hour")?;
    writeln!(
        out,
        "{:<6} {:>12} {:>12} {:>10}",
        "hour", "avg_rentals", "registered", "casual"
    )?;
    for row in &dashboard.hourly {
        writeln!(
            out,
            "{:<6} {:>12.2} {:>12.2} {:>10.2}",
            row.hour, row.avg_rentals, row.avg_registered_users, row.avg_casual_users
        )?;
    }

    writeln!(out, "\nRentals by Season")?;
    for row in &dashboard.seasons {
        writeln!(out, "{:<8} {:>12}", row.season_name(), row.total_rentals)?;
    }

    Ok(())
}
