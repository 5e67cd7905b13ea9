//! Asset identifier resolution.
//!
//! The single decision point combining the classifiers into one
//! identifier, as an explicitly ordered sequence of early returns:
//! calendar override, then the category exceptions (snow collapses time
//! granularity, storm ignores time entirely), then the standard
//! season/category/slot composition. Total: every input combination
//! yields an identifier, and identical inputs always yield the same one.

use chrono::NaiveDateTime;

use crate::config::EngineConfig;
use crate::core::{builtin_events, AirQualityLevel, Season, TimeSlot, WeatherCategory};
use crate::models::{AssetId, WeatherCondition};

/// Resolve the skyline (panorama) family image for one instant.
///
/// # Arguments
/// * `t` - Local timestamp being rendered
/// * `condition` - Provider weather condition at `t`
/// * `sunrise`, `sunset` - The day's sun events; the fixed-hour fallback
///   applies when either is absent
pub fn resolve_skyline(
    t: NaiveDateTime,
    condition: WeatherCondition,
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
) -> AssetId {
    resolve_skyline_with(&EngineConfig::default(), t, condition, sunrise, sunset)
}

/// [`resolve_skyline`] with explicit configuration.
pub fn resolve_skyline_with(
    config: &EngineConfig,
    t: NaiveDateTime,
    condition: WeatherCondition,
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
) -> AssetId {
    let slot = TimeSlot::classify(t, sunrise, sunset, config);

    // Calendar overrides bypass weather and season entirely; the slot
    // only picks which of the event's two images to use.
    if let Some(event) = builtin_events().active_on(t.date()) {
        return event.skyline_asset(slot.is_night());
    }

    let category = WeatherCategory::from_condition(condition);
    let season = Season::from_date(t.date());

    match category {
        // Snow covers the whole scene: one set of images regardless of
        // season, with a single golden variant for both golden slots.
        WeatherCategory::Snowy => AssetId::new(format!("D_snow_{}", golden_collapsed(slot))),

        // Storms look the same at any hour; only the season shows.
        WeatherCategory::Stormy => AssetId::new(format!("E_storm_{}", season.name())),

        // Golden light is only rendered for clear skies.
        WeatherCategory::Clear => AssetId::new(format!(
            "A_{}_{}",
            season.name(),
            golden_collapsed(slot)
        )),

        WeatherCategory::Cloudy => AssetId::new(format!(
            "B_{}_grey_{}",
            season.name(),
            day_night(slot)
        )),

        WeatherCategory::Rainy => AssetId::new(format!(
            "C_{}_rain_{}",
            season.name(),
            day_night(slot)
        )),
    }
}

/// Resolve the tower (Incity) family image for one instant.
///
/// Time of day only matters as a binary day/night split here. At night
/// the weather is ignored and the LED palette previews tomorrow's
/// forecast air quality; by day a handful of fixed backgrounds keyed by
/// weather apply, with no season axis.
///
/// # Arguments
/// * `air_quality_index` - Tomorrow's forecast index (1-6); absent or
///   out-of-range values display the worst-case colour
/// * `full_moon` - Lunar flag selecting the full-moon night variants
pub fn resolve_tower(
    t: NaiveDateTime,
    condition: WeatherCondition,
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
    air_quality_index: Option<u8>,
    full_moon: bool,
) -> AssetId {
    resolve_tower_with(
        &EngineConfig::default(),
        t,
        condition,
        sunrise,
        sunset,
        air_quality_index,
        full_moon,
    )
}

/// [`resolve_tower`] with explicit configuration.
pub fn resolve_tower_with(
    config: &EngineConfig,
    t: NaiveDateTime,
    condition: WeatherCondition,
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
    air_quality_index: Option<u8>,
    full_moon: bool,
) -> AssetId {
    let night = TimeSlot::classify(t, sunrise, sunset, config).is_night();

    if let Some(event) = builtin_events().active_on(t.date()) {
        return event.tower_asset(night);
    }

    if night {
        return AirQualityLevel::from_index(air_quality_index).night_asset(full_moon);
    }

    AssetId::new(format!("incity_{}_day", tower_day_background(condition)))
}

/// Day background name for the tower family.
///
/// The tower's day set distinguishes partly cloudy from overcast, a
/// finer cut than the five categories, so clear/cloudy consult the raw
/// condition.
fn tower_day_background(condition: WeatherCondition) -> &'static str {
    use WeatherCondition::*;
    match WeatherCategory::from_condition(condition) {
        WeatherCategory::Snowy => "snow",
        WeatherCategory::Stormy => "storm",
        WeatherCategory::Rainy => "rain",
        WeatherCategory::Clear => "clear",
        WeatherCategory::Cloudy => match condition {
            PartlyCloudy | MostlyCloudy => "partly_cloudy",
            _ => "cloudy",
        },
    }
}

/// Both golden slots share one suffix, distinct from day and night.
fn golden_collapsed(slot: TimeSlot) -> &'static str {
    match slot {
        TimeSlot::GoldenMorning | TimeSlot::GoldenEvening => "golden",
        TimeSlot::Day => "day",
        TimeSlot::Night => "night",
    }
}

/// Binary split: golden slots degrade to the day suffix.
fn day_night(slot: TimeSlot) -> &'static str {
    if slot.is_night() {
        "night"
    } else {
        "day"
    }
}
