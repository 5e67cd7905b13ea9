//! Parser for the provider's hourly forecast JSON.
//!
//! The weather adapter hands the engine an array of hourly entries with
//! camelCase keys. Unknown condition codes degrade to the cloudy
//! default with a warning, but entries with malformed timestamps fail
//! the whole payload, since a hole in the sequence would silently
//! shorten the projection horizon.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{ForecastSample, WeatherCondition};

/// Raw JSON structure for one hourly forecast entry.
#[derive(Debug, Deserialize)]
struct RawHour {
    #[serde(rename = "forecastStart")]
    forecast_start: NaiveDateTime,
    #[serde(rename = "conditionCode")]
    condition_code: String,
}

/// Parse an hourly forecast payload into samples.
///
/// # Arguments
/// * `json` - JSON array of `{forecastStart, conditionCode}` objects
///
/// # Returns
/// * `Ok(Vec<ForecastSample>)` in input order
/// * `Err(Error)` if the payload is not valid JSON or a timestamp is
///   malformed
pub fn parse_forecast_json(json: &str) -> Result<Vec<ForecastSample>> {
    let raw: Vec<RawHour> = serde_json::from_str(json)?;

    let samples = raw
        .into_iter()
        .map(|hour| {
            let condition = match WeatherCondition::from_provider_code(&hour.condition_code) {
                Some(c) => c,
                None => {
                    log::warn!(
                        "unknown condition code '{}' at {}, using cloudy",
                        hour.condition_code,
                        hour.forecast_start
                    );
                    WeatherCondition::Cloudy
                }
            };
            ForecastSample::new(hour.forecast_start, condition)
        })
        .collect();

    Ok(samples)
}
