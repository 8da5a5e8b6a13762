use crate::analyzers::types::DailySummary;
use crate::records::DailyRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Groups daily records by calendar date and sums their counts.
///
/// The result holds one row per distinct date, ascending. An empty input
/// yields an empty summary.
#[tracing::instrument(skip(records), fields(rows = records.len()))]
pub fn aggregate_daily(records: &[DailyRecord]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for r in records {
        let row = by_date.entry(r.date).or_insert_with(|| DailySummary {
            date: r.date,
            total_rentals: 0,
            registered_users: 0,
            casual_users: 0,
        });

        row.total_rentals += u64::from(r.total_count);
        row.registered_users += u64::from(r.registered_count);
        row.casual_users += u64::from(r.casual_count);
    }

    let summary: Vec<DailySummary> = by_date.into_values().collect();
    debug!(dates = summary.len(), "Aggregated daily summary");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_two_days() {
        let records = vec![
            DailyRecord::new(day(1), 1, 70, 30),
            DailyRecord::new(day(2), 1, 120, 30),
        ];

        let summary = aggregate_daily(&records);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].date, day(1));
        assert_eq!(summary[0].total_rentals, 100);
        assert_eq!(summary[1].date, day(2));
        assert_eq!(summary[1].total_rentals, 150);
    }

    #[test]
    fn test_duplicate_dates_are_summed_and_sorted() {
        let records = vec![
            DailyRecord::new(day(3), 2, 5, 1),
            DailyRecord::new(day(1), 1, 10, 2),
            DailyRecord::new(day(3), 2, 7, 3),
        ];

        let summary = aggregate_daily(&records);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].date, day(1));
        assert_eq!(
            summary[1],
            DailySummary {
                date: day(3),
                total_rentals: 16,
                registered_users: 12,
                casual_users: 4,
            }
        );
    }

    #[test]
    fn test_totals_are_conserved() {
        let records: Vec<_> = (1..=28)
            .map(|d| DailyRecord::new(day(d % 7 + 1), 1, d * 13, d * 3))
            .collect();

        let summary = aggregate_daily(&records);

        let input: u64 = records.iter().map(|r| u64::from(r.total_count)).sum();
        let output: u64 = summary.iter().map(|s| s.total_rentals).sum();
        assert_eq!(input, output);
        assert_eq!(summary.len(), 7);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            DailyRecord::new(day(2), 1, 1, 1),
            DailyRecord::new(day(1), 1, 2, 2),
        ];
        assert_eq!(aggregate_daily(&records), aggregate_daily(&records));
    }
}
