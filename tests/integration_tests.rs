use bike_rental_dashboard::analyzers::{
    aggregate_daily, aggregate_hourly, aggregate_seasonal, filter_by_date_range,
};
use bike_rental_dashboard::dashboard::Dashboard;
use bike_rental_dashboard::error::ValidationError;
use bike_rental_dashboard::parser::{parse_daily, parse_hourly};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_pipeline() {
    let daily = parse_daily(include_bytes!("fixtures/day.csv")).expect("Failed to parse day.csv");
    let hourly =
        parse_hourly(include_bytes!("fixtures/hour.csv")).expect("Failed to parse hour.csv");

    let summary = aggregate_daily(&daily);
    assert_eq!(summary.len(), 9);
    assert_eq!(summary[0].date, date(2011, 1, 1));
    assert_eq!(summary[0].total_rentals, 985);

    let input_total: u64 = daily.iter().map(|r| u64::from(r.total_count)).sum();
    let summary_total: u64 = summary.iter().map(|r| r.total_rentals).sum();
    assert_eq!(input_total, summary_total);

    let first_week = filter_by_date_range(&summary, date(2011, 1, 1), date(2011, 1, 7));
    assert_eq!(first_week.len(), 3);

    let hours = aggregate_hourly(&hourly);
    let hour_keys: Vec<_> = hours.iter().map(|h| h.hour).collect();
    assert_eq!(hour_keys, vec![0, 1, 2, 8]);
    assert_eq!(hours[0].avg_rentals, 16.5);
    assert_eq!(hours[3].avg_casual_users, 1.5);

    let seasons = aggregate_seasonal(&daily).unwrap();
    let labelled: Vec<_> = seasons
        .iter()
        .map(|s| (s.season_name(), s.total_rentals))
        .collect();
    assert_eq!(
        labelled,
        vec![
            ("Spring", 985 + 801 + 1349 + 3228),
            ("Summer", 2071 + 1791),
            ("Fall", 4835 + 4507),
            ("Winter", 4839),
        ]
    );
}

#[test]
fn test_dashboard_from_fixtures() {
    let daily = parse_daily(include_bytes!("fixtures/day.csv")).unwrap();
    let hourly = parse_hourly(include_bytes!("fixtures/hour.csv")).unwrap();

    let full = Dashboard::build(&daily, &hourly, None, None).unwrap();
    assert_eq!(full.filtered_daily, aggregate_daily(&daily));

    let one_day = Dashboard::build(
        &daily,
        &hourly,
        Some(date(2011, 1, 1)),
        Some(date(2011, 1, 1)),
    )
    .unwrap();
    assert_eq!(one_day.filtered_daily.len(), 1);
    assert_eq!(one_day.metrics.total_rentals, 985);
    assert_eq!(one_day.metrics.registered_users, 654);
    assert_eq!(one_day.metrics.casual_users, 331);
}

#[test]
fn test_unknown_season_in_table() {
    let csv = "dteday,season,casual,registered,cnt\n2011-01-01,5,1,2,3\n";
    let daily = parse_daily(csv.as_bytes()).unwrap();

    assert_eq!(
        aggregate_seasonal(&daily),
        Err(ValidationError::UnknownSeason {
            code: 5,
            date: date(2011, 1, 1),
        })
    );
}
