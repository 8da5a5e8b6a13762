use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of `day.csv`: rental activity for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "season")]
    pub season_code: u8,

    // counts
    #[serde(rename = "cnt")]
    pub total_count: u32,
    #[serde(rename = "registered")]
    pub registered_count: u32,
    #[serde(rename = "casual")]
    pub casual_count: u32,
}

/// One row of `hour.csv`: rental activity for one hour of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "hr")]
    pub hour: u8,

    // counts
    #[serde(rename = "cnt")]
    pub total_count: u32,
    #[serde(rename = "registered")]
    pub registered_count: u32,
    #[serde(rename = "casual")]
    pub casual_count: u32,
}

impl DailyRecord {
    /// Builds a record whose total is `registered + casual`.
    ///
    /// The total saturates at `u32::MAX`; such a record reports
    /// [`consistent`](Self::consistent) as false.
    pub fn new(date: NaiveDate, season_code: u8, registered: u32, casual: u32) -> Self {
        DailyRecord {
            date,
            season_code,
            total_count: registered.saturating_add(casual),
            registered_count: registered,
            casual_count: casual,
        }
    }

    /// Whether `total_count == registered_count + casual_count`.
    pub fn consistent(&self) -> bool {
        u64::from(self.total_count)
            == u64::from(self.registered_count) + u64::from(self.casual_count)
    }
}

impl HourlyRecord {
    /// Builds a record whose total is `registered + casual`, saturating at
    /// `u32::MAX`.
    pub fn new(hour: u8, registered: u32, casual: u32) -> Self {
        HourlyRecord {
            hour,
            total_count: registered.saturating_add(casual),
            registered_count: registered,
            casual_count: casual,
        }
    }

    /// Whether `total_count == registered_count + casual_count`.
    pub fn consistent(&self) -> bool {
        u64::from(self.total_count)
            == u64::from(self.registered_count) + u64::from(self.casual_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_total() {
        let r = DailyRecord::new(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(), 1, 654, 331);
        assert_eq!(r.total_count, 985);
        assert!(r.consistent());
    }

    #[test]
    fn test_new_saturates_total() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let day = DailyRecord::new(date, 1, u32::MAX, 1);
        assert_eq!(day.total_count, u32::MAX);
        assert!(!day.consistent());

        let hour = HourlyRecord::new(0, 1, u32::MAX);
        assert_eq!(hour.total_count, u32::MAX);
        assert!(!hour.consistent());
    }

    #[test]
    fn test_inconsistent_record() {
        let mut r = HourlyRecord::new(8, 10, 3);
        r.total_count = 20;
        assert!(!r.consistent());
    }
}
