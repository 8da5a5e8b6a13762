//! CLI entry point for the bike rental dashboard.
//!
//! Loads the daily and hourly rental tables, builds the summary tables, and
//! prints them as a report or exports them as CSV/JSON plus PNG charts.

use anyhow::{Context, Result};
use bike_rental_dashboard::{
    analyzers::{
        DateRange, aggregate_daily, aggregate_hourly, aggregate_seasonal, filter_by_date_range,
    },
    charts::render_dashboard,
    config::Config,
    dashboard::Dashboard,
    fetch::load_source,
    output::{print_pretty, render_report, to_json, write_csv},
    parser::{parse_daily, parse_hourly},
    records::{DailyRecord, HourlyRecord},
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bike_rental_dashboard")]
#[command(about = "Summaries of daily and hourly bike rental data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full dashboard: metrics, daily, hourly and seasonal tables
    Summary {
        /// Path or URL of the daily table (day.csv)
        #[arg(long)]
        day: Option<String>,

        /// Path or URL of the hourly table (hour.csv)
        #[arg(long)]
        hour: Option<String>,

        /// First date to include (YYYY-MM-DD), defaults to the earliest date
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last date to include (YYYY-MM-DD), defaults to the latest date
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Print JSON instead of the text report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Daily totals, optionally restricted to a date range
    Daily {
        #[arg(long)]
        day: Option<String>,

        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        /// CSV file to write instead of printing
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Average rentals per hour of day
    Hourly {
        #[arg(long)]
        hour: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Total rentals per season
    Seasons {
        #[arg(long)]
        day: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Write every summary table as CSV, the dashboard as JSON, and the charts as PNG
    Export {
        #[arg(long)]
        day: Option<String>,

        #[arg(long)]
        hour: Option<String>,

        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        /// Directory to write the files into
        #[arg(short = 'd', long, default_value = "summaries")]
        output_dir: String,

        /// Gzip compress the CSV files
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let config = Config::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&config.log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&config.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bike_rental_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            day,
            hour,
            start,
            end,
            json,
        } => {
            let daily = load_daily(day.as_deref().unwrap_or(&config.day_source))?;
            let hourly = load_hourly(hour.as_deref().unwrap_or(&config.hour_source))?;
            let dashboard = Dashboard::build(&daily, &hourly, start, end)?;
            print_pretty(&dashboard.metrics);

            if json {
                println!("{}", to_json(&dashboard)?);
            } else {
                print!("{}", render_report(&dashboard));
            }
        }
        Commands::Daily {
            day,
            start,
            end,
            output,
        } => {
            let daily = load_daily(day.as_deref().unwrap_or(&config.day_source))?;
            let summary = aggregate_daily(&daily);
            let summary = match DateRange::resolve(&daily, start, end) {
                Some(range) => filter_by_date_range(&summary, range.start, range.end),
                None => summary,
            };

            match output {
                Some(path) => {
                    let written = write_csv(&path, &summary, false)?;
                    info!(path = %written, rows = summary.len(), "Daily summary written");
                }
                None => {
                    for row in &summary {
                        println!(
                            "{}\t{}\t{}\t{}",
                            row.date, row.total_rentals, row.registered_users, row.casual_users
                        );
                    }
                }
            }
        }
        Commands::Hourly { hour, output } => {
            let hourly = load_hourly(hour.as_deref().unwrap_or(&config.hour_source))?;
            let summary = aggregate_hourly(&hourly);

            match output {
                Some(path) => {
                    let written = write_csv(&path, &summary, false)?;
                    info!(path = %written, rows = summary.len(), "Hourly summary written");
                }
                None => {
                    for row in &summary {
                        println!(
                            "{}\t{:.2}\t{:.2}\t{:.2}",
                            row.hour,
                            row.avg_rentals,
                            row.avg_registered_users,
                            row.avg_casual_users
                        );
                    }
                }
            }
        }
        Commands::Seasons { day, output } => {
            let daily = load_daily(day.as_deref().unwrap_or(&config.day_source))?;
            let summary = aggregate_seasonal(&daily)?;

            match output {
                Some(path) => {
                    let written = write_csv(&path, &summary, false)?;
                    info!(path = %written, rows = summary.len(), "Seasonal summary written");
                }
                None => {
                    for row in &summary {
                        println!("{}\t{}", row.season_name(), row.total_rentals);
                    }
                }
            }
        }
        Commands::Export {
            day,
            hour,
            start,
            end,
            output_dir,
            gzip,
        } => {
            let daily = load_daily(day.as_deref().unwrap_or(&config.day_source))?;
            let hourly = load_hourly(hour.as_deref().unwrap_or(&config.hour_source))?;
            export(&daily, &hourly, start, end, &output_dir, gzip)?;
        }
    }

    Ok(())
}

#[tracing::instrument]
fn load_daily(source: &str) -> Result<Vec<DailyRecord>> {
    let bytes = load_source(source)?;
    let records = parse_daily(&bytes).with_context(|| format!("invalid daily table {source}"))?;
    info!(rows = records.len(), "Daily records loaded");
    Ok(records)
}

#[tracing::instrument]
fn load_hourly(source: &str) -> Result<Vec<HourlyRecord>> {
    let bytes = load_source(source)?;
    let records = parse_hourly(&bytes).with_context(|| format!("invalid hourly table {source}"))?;
    info!(rows = records.len(), "Hourly records loaded");
    Ok(records)
}

/// Writes the three summary tables as CSV, the whole dashboard as JSON and
/// the three charts as PNG into `output_dir`.
#[tracing::instrument(skip(daily, hourly))]
fn export(
    daily: &[DailyRecord],
    hourly: &[HourlyRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    output_dir: &str,
    gzip: bool,
) -> Result<()> {
    let dashboard = Dashboard::build(daily, hourly, start, end)?;

    // Create output directory if it doesn't exist
    std::fs::create_dir_all(output_dir)?;

    let mut written = vec![
        write_csv(
            &format!("{}/daily_summary.csv", output_dir),
            &dashboard.filtered_daily,
            gzip,
        )?,
        write_csv(
            &format!("{}/hourly_summary.csv", output_dir),
            &dashboard.hourly,
            gzip,
        )?,
        write_csv(
            &format!("{}/season_summary.csv", output_dir),
            &dashboard.seasons,
            gzip,
        )?,
    ];

    let json_path = format!("{}/dashboard.json", output_dir);
    std::fs::write(&json_path, to_json(&dashboard)?)?;
    written.push(json_path);

    for chart in render_dashboard(&dashboard, Path::new(output_dir))? {
        written.push(chart.display().to_string());
    }

    info!(files = written.len(), output_dir, "Export complete");
    Ok(())
}
