//! Error types surfaced by the aggregation core and the CSV parsers.

use chrono::NaiveDate;
use thiserror::Error;

/// An input record the core cannot aggregate.
///
/// Every failure is deterministic; callers get no partial summary back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown season code {code} on {date} (expected 1-4)")]
    UnknownSeason { code: u8, date: NaiveDate },

    #[error("hour {hour} on line {line} is outside 0-23")]
    HourOutOfRange { hour: u8, line: u64 },

    #[error("malformed row on line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

impl ValidationError {
    /// Wraps a `csv` deserialization failure, keeping the offending line.
    pub(crate) fn from_csv(err: &csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let reason = match err.kind() {
            csv::ErrorKind::Deserialize { err, .. } => match err.field() {
                Some(idx) => format!("field {}: {}", idx + 1, err.kind()),
                None => err.kind().to_string(),
            },
            _ => err.to_string(),
        };
        ValidationError::MalformedRow { line, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_season_message() {
        let err = ValidationError::UnknownSeason {
            code: 7,
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "unknown season code 7 on 2011-01-01 (expected 1-4)"
        );
    }

    #[test]
    fn test_hour_out_of_range_message() {
        let err = ValidationError::HourOutOfRange { hour: 24, line: 3 };
        assert_eq!(err.to_string(), "hour 24 on line 3 is outside 0-23");
    }
}
