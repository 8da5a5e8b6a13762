//! The view a dashboard renders: one filtered daily table, the hourly and
//! seasonal tables, and the headline metrics.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::analyzers::types::{DailySummary, HourlySummary, SeasonSummary};
use crate::analyzers::{
    DateRange, aggregate_daily, aggregate_hourly, aggregate_seasonal, filter_by_date_range,
};
use crate::error::ValidationError;
use crate::records::{DailyRecord, HourlyRecord};

/// Totals over a (usually filtered) daily summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RentalMetrics {
    pub total_rentals: u64,
    pub registered_users: u64,
    pub casual_users: u64,
}

impl RentalMetrics {
    pub fn from_summary(summary: &[DailySummary]) -> Self {
        summary.iter().fold(Self::default(), |acc, row| RentalMetrics {
            total_rentals: acc.total_rentals + row.total_rentals,
            registered_users: acc.registered_users + row.registered_users,
            casual_users: acc.casual_users + row.casual_users,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// `None` only when the daily dataset is empty and a bound was left open.
    pub range: Option<DateRange>,
    pub filtered_daily: Vec<DailySummary>,
    pub hourly: Vec<HourlySummary>,
    pub seasons: Vec<SeasonSummary>,
    pub metrics: RentalMetrics,
}

impl Dashboard {
    /// Recomputes every summary from scratch for one request.
    ///
    /// A missing `start` or `end` defaults to the corresponding extreme of
    /// the daily dataset's dates.
    ///
    /// # Errors
    ///
    /// Propagates [`ValidationError`] from the seasonal aggregation.
    #[tracing::instrument(
        skip(daily, hourly),
        fields(daily_rows = daily.len(), hourly_rows = hourly.len())
    )]
    pub fn build(
        daily: &[DailyRecord],
        hourly: &[HourlyRecord],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let seasons = aggregate_seasonal(daily)?;
        let hourly = aggregate_hourly(hourly);
        let daily_summary = aggregate_daily(daily);

        let range = DateRange::resolve(daily, start, end);

        let filtered_daily = match range {
            Some(r) => filter_by_date_range(&daily_summary, r.start, r.end),
            None => daily_summary,
        };
        let metrics = RentalMetrics::from_summary(&filtered_daily);

        info!(
            days = filtered_daily.len(),
            total_rentals = metrics.total_rentals,
            "Dashboard built"
        );

        Ok(Dashboard {
            range,
            filtered_daily,
            hourly,
            seasons,
            metrics,
        })
    }
}
