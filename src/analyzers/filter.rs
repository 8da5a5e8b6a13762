use crate::analyzers::types::DailySummary;
use crate::records::DailyRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive date window chosen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// The full span `[min(date), max(date)]` of the daily dataset, or `None`
    /// when it has no rows.
    pub fn spanning(records: &[DailyRecord]) -> Option<Self> {
        let start = records.iter().map(|r| r.date).min()?;
        let end = records.iter().map(|r| r.date).max()?;
        Some(DateRange { start, end })
    }

    /// The range a request actually uses: each missing bound defaults to the
    /// matching extreme of the dataset span. `None` only when a bound is
    /// missing and `records` is empty.
    pub fn resolve(
        records: &[DailyRecord],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<Self> {
        let span = if start.is_none() || end.is_none() {
            Self::spanning(records)
        } else {
            None
        };
        let start = start.or(span.map(|s| s.start))?;
        let end = end.or(span.map(|s| s.end))?;
        Some(DateRange { start, end })
    }

    /// Both ends included. Always false when `start > end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Keeps the rows of `summary` whose date lies in `[start, end]`, in their
/// original order.
///
/// `start > end` yields an empty result. Bounds beyond the data's span simply
/// select up to the data's own extremes.
#[tracing::instrument(skip(summary), fields(rows = summary.len()))]
pub fn filter_by_date_range(
    summary: &[DailySummary],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailySummary> {
    let range = DateRange::new(start, end);
    let filtered: Vec<DailySummary> = summary
        .iter()
        .filter(|row| range.contains(row.date))
        .cloned()
        .collect();

    debug!(kept = filtered.len(), "Filtered daily summary");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn summary() -> Vec<DailySummary> {
        (1..=5)
            .map(|d| DailySummary {
                date: day(d),
                total_rentals: u64::from(d) * 100,
                registered_users: u64::from(d) * 80,
                casual_users: u64::from(d) * 20,
            })
            .collect()
    }

    #[test]
    fn test_full_span_is_identity() {
        let s = summary();
        assert_eq!(filter_by_date_range(&s, day(1), day(5)), s);
    }

    #[test]
    fn test_single_day() {
        let s = summary();
        let filtered = filter_by_date_range(&s, day(1), day(1));
        assert_eq!(filtered, vec![s[0].clone()]);
    }

    #[test]
    fn test_swapped_bounds_are_empty() {
        let s = summary();
        assert!(filter_by_date_range(&s, day(4), day(2)).is_empty());
    }

    #[test]
    fn test_bounds_beyond_span() {
        let s = summary();
        let before = NaiveDate::from_ymd_opt(2010, 6, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2012, 6, 1).unwrap();

        assert_eq!(filter_by_date_range(&s, before, after), s);
        assert_eq!(filter_by_date_range(&s, before, day(2)).len(), 2);
        assert!(filter_by_date_range(&s, after, after).is_empty());
    }

    #[test]
    fn test_inclusive_interior() {
        let s = summary();
        let dates: Vec<_> = filter_by_date_range(&s, day(2), day(4))
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![day(2), day(3), day(4)]);
    }

    #[test]
    fn test_spanning() {
        let records = vec![
            DailyRecord::new(day(3), 1, 1, 1),
            DailyRecord::new(day(1), 1, 1, 1),
            DailyRecord::new(day(2), 1, 1, 1),
        ];
        assert_eq!(
            DateRange::spanning(&records),
            Some(DateRange::new(day(1), day(3)))
        );
        assert_eq!(DateRange::spanning(&[]), None);
    }

    #[test]
    fn test_resolve_fills_missing_bounds() {
        let records = vec![
            DailyRecord::new(day(2), 1, 1, 1),
            DailyRecord::new(day(9), 1, 1, 1),
        ];

        assert_eq!(
            DateRange::resolve(&records, None, None),
            Some(DateRange::new(day(2), day(9)))
        );
        assert_eq!(
            DateRange::resolve(&records, Some(day(5)), None),
            Some(DateRange::new(day(5), day(9)))
        );
        assert_eq!(
            DateRange::resolve(&[], Some(day(1)), Some(day(4))),
            Some(DateRange::new(day(1), day(4)))
        );
        assert_eq!(DateRange::resolve(&[], None, Some(day(4))), None);
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(day(3), day(1));
        assert!(range.is_empty());
        assert!(!range.contains(day(2)));
    }
}
