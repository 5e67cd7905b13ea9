//! Forecast inputs and timeline outputs.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::asset::AssetId;
use super::condition::WeatherCondition;

/// Sunrise and sunset instants for one calendar day, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

impl SunTimes {
    pub fn new(sunrise: NaiveDateTime, sunset: NaiveDateTime) -> Self {
        Self { sunrise, sunset }
    }

    /// Estimate the next day's sun times by shifting both instants 24h.
    ///
    /// Used by the timeline generator when the provider has not supplied
    /// tomorrow's real values; the error against the true ephemeris is a
    /// couple of minutes, well inside the golden-hour margins.
    pub fn shifted_by_one_day(&self) -> Self {
        Self {
            sunrise: self.sunrise + Duration::hours(24),
            sunset: self.sunset + Duration::hours(24),
        }
    }
}

/// One hourly forecast sample from the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub condition: WeatherCondition,
}

impl ForecastSample {
    pub fn new(timestamp: NaiveDateTime, condition: WeatherCondition) -> Self {
        Self {
            timestamp,
            condition,
        }
    }
}

/// One resolved entry of a projected timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: NaiveDateTime,
    pub asset: AssetId,
}

impl TimelineEntry {
    pub fn new(timestamp: NaiveDateTime, asset: AssetId) -> Self {
        Self { timestamp, asset }
    }
}
