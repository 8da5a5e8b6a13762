use crate::analyzers::types::HourlySummary;
use crate::records::HourlyRecord;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Default)]
struct HourTotals {
    rows: u64,
    total: u64,
    registered: u64,
    casual: u64,
}

impl HourTotals {
    fn mean(&self, sum: u64) -> f64 {
        sum as f64 / self.rows as f64
    }
}

/// Groups hourly records by hour of day and averages their counts.
///
/// Only hours with at least one record appear, ascending by hour, so no
/// mean is ever taken over an empty group.
#[tracing::instrument(skip(records), fields(rows = records.len()))]
pub fn aggregate_hourly(records: &[HourlyRecord]) -> Vec<HourlySummary> {
    let mut by_hour: BTreeMap<u8, HourTotals> = BTreeMap::new();

    for r in records {
        let totals = by_hour.entry(r.hour).or_default();
        totals.rows += 1;
        totals.total += u64::from(r.total_count);
        totals.registered += u64::from(r.registered_count);
        totals.casual += u64::from(r.casual_count);
    }

    let summary: Vec<HourlySummary> = by_hour
        .into_iter()
        .map(|(hour, totals)| HourlySummary {
            hour,
            avg_rentals: totals.mean(totals.total),
            avg_registered_users: totals.mean(totals.registered),
            avg_casual_users: totals.mean(totals.casual),
        })
        .collect();

    debug!(hours = summary.len(), "Aggregated hourly summary");
    summary
}
