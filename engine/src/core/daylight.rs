//! Day/night/golden-hour slot classification.
//!
//! Given a timestamp and the day's sunrise/sunset, picks one of four
//! lighting slots. The golden windows straddle the sun events with the
//! asymmetric margins from [`GoldenHourMargins`]; everything outside
//! golden morning, day, and golden evening is night, which naturally
//! wraps past midnight. Without astronomical data the classifier drops
//! to a fixed-hour heuristic and never fails.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, FallbackHours, GoldenHourMargins};

/// Lighting slot of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeSlot {
    GoldenMorning,
    Day,
    GoldenEvening,
    Night,
}

impl TimeSlot {
    /// Classify a timestamp against optional sunrise/sunset instants.
    ///
    /// With both bounds present the four half-open windows are:
    /// golden morning `[sunrise - before, sunrise + after)`, day up to
    /// `sunset - before`, golden evening up to `sunset + after`, night
    /// otherwise. With either bound missing, classification falls back
    /// to the fixed-hour table in the configuration.
    pub fn classify(
        t: NaiveDateTime,
        sunrise: Option<NaiveDateTime>,
        sunset: Option<NaiveDateTime>,
        config: &EngineConfig,
    ) -> TimeSlot {
        match (sunrise, sunset) {
            (Some(sr), Some(ss)) => Self::classify_astronomical(t, sr, ss, &config.golden_hour),
            _ => Self::classify_fallback(t, &config.fallback_hours),
        }
    }

    fn classify_astronomical(
        t: NaiveDateTime,
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
        margins: &GoldenHourMargins,
    ) -> TimeSlot {
        let golden_morning_start = sunrise - Duration::minutes(margins.before_sunrise_min);
        let day_start = sunrise + Duration::minutes(margins.after_sunrise_min);
        let golden_evening_start = sunset - Duration::minutes(margins.before_sunset_min);
        let night_start = sunset + Duration::minutes(margins.after_sunset_min);

        if t >= golden_morning_start && t < day_start {
            TimeSlot::GoldenMorning
        } else if t >= day_start && t < golden_evening_start {
            TimeSlot::Day
        } else if t >= golden_evening_start && t < night_start {
            TimeSlot::GoldenEvening
        } else {
            TimeSlot::Night
        }
    }

    /// Degraded-mode path for when the astronomical data never arrived.
    fn classify_fallback(t: NaiveDateTime, hours: &FallbackHours) -> TimeSlot {
        let h = t.hour();
        if (hours.golden_morning_start..hours.day_start).contains(&h) {
            TimeSlot::GoldenMorning
        } else if (hours.day_start..hours.golden_evening_start).contains(&h) {
            TimeSlot::Day
        } else if (hours.golden_evening_start..hours.night_start).contains(&h) {
            TimeSlot::GoldenEvening
        } else {
            TimeSlot::Night
        }
    }

    /// Whether this slot is one of the two golden-hour windows.
    pub fn is_golden(self) -> bool {
        matches!(self, TimeSlot::GoldenMorning | TimeSlot::GoldenEvening)
    }

    /// Collapse to the binary day/night split used by calendar-event
    /// variants and the tower family (golden slots count as day).
    pub fn is_night(self) -> bool {
        self == TimeSlot::Night
    }

    /// camelCase name matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            TimeSlot::GoldenMorning => "goldenMorning",
            TimeSlot::Day => "day",
            TimeSlot::GoldenEvening => "goldenEvening",
            TimeSlot::Night => "night",
        }
    }
}
