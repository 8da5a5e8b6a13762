//! Season classification shared by the seasonal aggregator and any display code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meteorological season as coded in the daily dataset (`season` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Fixed code-to-season table. Codes outside it have no label.
    pub const ALL: [(u8, Season); 4] = [
        (1, Season::Spring),
        (2, Season::Summer),
        (3, Season::Fall),
        (4, Season::Winter),
    ];

    pub fn from_code(code: u8) -> Option<Season> {
        Self::ALL
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, season)| *season)
    }

    pub fn code(self) -> u8 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
