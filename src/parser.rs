//! CSV parser for the daily and hourly bike-sharing tables.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::records::{DailyRecord, HourlyRecord};

/// Decodes `day.csv` content into [`DailyRecord`]s.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedRow`] if any row is missing a required
/// column or holds a non-numeric count.
pub fn parse_daily(bytes: &[u8]) -> Result<Vec<DailyRecord>, ValidationError> {
    let rows: Vec<DailyRecord> = read_rows(bytes)?
        .into_iter()
        .map(|(_, record)| record)
        .collect();

    warn_inconsistent("daily", rows.iter().filter(|r| !r.consistent()).count());
    debug!(rows = rows.len(), "Parsed daily records");
    Ok(rows)
}

/// Decodes `hour.csv` content into [`HourlyRecord`]s.
///
/// # Errors
///
/// Same as [`parse_daily`], plus [`ValidationError::HourOutOfRange`] for an
/// `hr` value above 23.
pub fn parse_hourly(bytes: &[u8]) -> Result<Vec<HourlyRecord>, ValidationError> {
    let mut rows = Vec::new();
    for (line, record) in read_rows::<HourlyRecord>(bytes)? {
        if record.hour > 23 {
            return Err(ValidationError::HourOutOfRange {
                hour: record.hour,
                line,
            });
        }
        rows.push(record);
    }

    warn_inconsistent("hourly", rows.iter().filter(|r| !r.consistent()).count());
    debug!(rows = rows.len(), "Parsed hourly records");
    Ok(rows)
}

fn read_rows<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<(u64, T)>, ValidationError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(bytes);
    let headers = rdr
        .headers()
        .map_err(|e| ValidationError::from_csv(&e))?
        .clone();

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) => return Err(ValidationError::from_csv(&e)),
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| match ValidationError::from_csv(&e) {
                ValidationError::MalformedRow { reason, .. } => {
                    ValidationError::MalformedRow { line, reason }
                }
                other => other,
            })?;
        rows.push((line, row));
    }

    Ok(rows)
}

// total = registered + casual is not enforced, only reported.
fn warn_inconsistent(table: &str, count: usize) {
    if count > 0 {
        warn!(table, rows = count, "Rows where cnt != registered + casual");
    }
}
