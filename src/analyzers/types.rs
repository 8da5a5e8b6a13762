//! Row types of the derived summary tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::season::Season;

/// Rentals summed over one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_rentals: u64,
    pub registered_users: u64,
    pub casual_users: u64,
}

/// Rentals averaged over every record sharing one hour of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySummary {
    pub hour: u8,
    pub avg_rentals: f64,
    pub avg_registered_users: f64,
    pub avg_casual_users: f64,
}

/// Rentals summed over one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    #[serde(rename = "season_name")]
    pub season: Season,
    pub total_rentals: u64,
}

impl SeasonSummary {
    pub fn season_name(&self) -> &'static str {
        self.season.name()
    }
}
