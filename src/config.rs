//! Runtime configuration read from the environment (and `.env`).

/// Where the two source tables and the log file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub day_source: String,
    pub hour_source: String,
    pub log_file_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            day_source: "data/day.csv".to_string(),
            hour_source: "data/hour.csv".to_string(),
            log_file_path: "logs/bike_rental_dashboard.log".to_string(),
        }
    }
}

impl Config {
    /// Reads `BIKE_DAY_SOURCE`, `BIKE_HOUR_SOURCE` and `LOG_FILE_PATH`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            day_source: lookup("BIKE_DAY_SOURCE").unwrap_or(defaults.day_source),
            hour_source: lookup("BIKE_HOUR_SOURCE").unwrap_or(defaults.hour_source),
            log_file_path: lookup("LOG_FILE_PATH").unwrap_or(defaults.log_file_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            "BIKE_DAY_SOURCE" => Some("https://example.org/day.csv.gz".to_string()),
            _ => None,
        });

        assert_eq!(config.day_source, "https://example.org/day.csv.gz");
        assert_eq!(config.hour_source, "data/hour.csv");
    }
}
