use crate::analyzers::types::SeasonSummary;
use crate::error::ValidationError;
use crate::records::DailyRecord;
use crate::season::Season;
use std::collections::BTreeMap;
use tracing::debug;

/// Groups daily records by season and sums `total_count` per season.
///
/// Rows come out in season-code order (Spring, Summer, Fall, Winter), one per
/// season present in the input.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownSeason`] for the first record whose
/// `season_code` is not in [`Season::ALL`]. No partial summary is returned.
#[tracing::instrument(skip(records), fields(rows = records.len()))]
pub fn aggregate_seasonal(records: &[DailyRecord]) -> Result<Vec<SeasonSummary>, ValidationError> {
    let mut by_season: BTreeMap<Season, u64> = BTreeMap::new();

    for r in records {
        let season = Season::from_code(r.season_code).ok_or(ValidationError::UnknownSeason {
            code: r.season_code,
            date: r.date,
        })?;
        *by_season.entry(season).or_insert(0) += u64::from(r.total_count);
    }

    let summary: Vec<SeasonSummary> = by_season
        .into_iter()
        .map(|(season, total_rentals)| SeasonSummary {
            season,
            total_rentals,
        })
        .collect();

    debug!(seasons = summary.len(), "Aggregated seasonal summary");
    Ok(summary)
}
