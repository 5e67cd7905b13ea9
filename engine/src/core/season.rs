//! Astronomical season classification.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the four astronomical seasons (Northern hemisphere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Classify a calendar month/day into a season.
    ///
    /// Fixed boundary table (astronomical approximation): Dec 21–Mar 19
    /// winter, Mar 20–Jun 20 spring, Jun 21–Sep 21 summer, Sep 22–Dec 20
    /// autumn. Boundary days belong to the later season. Total for every
    /// valid date; the year is irrelevant.
    pub fn from_month_day(month: u32, day: u32) -> Season {
        match (month, day) {
            (1..=2, _) => Season::Winter,
            (3, d) if d < 20 => Season::Winter,
            (3, _) | (4..=5, _) => Season::Spring,
            (6, d) if d < 21 => Season::Spring,
            (6, _) | (7..=8, _) => Season::Summer,
            (9, d) if d < 22 => Season::Summer,
            (9, _) | (10..=11, _) => Season::Autumn,
            (12, d) if d < 21 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Classify a calendar date into a season.
    pub fn from_date(date: NaiveDate) -> Season {
        Season::from_month_day(date.month(), date.day())
    }

    /// Lowercase name used in asset identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}
