//! Forward timeline projection.
//!
//! Resolves a whole hourly forecast in one synchronous pass so the
//! scheduler can pre-compute entries for the next ~24 hours. Per sample
//! the generator picks today's or tomorrow's sunrise/sunset pair by
//! calendar date; when tomorrow's real pair is unavailable it estimates
//! one by shifting today's by 24 hours. Input order is preserved and no
//! deduplication happens: adjacent samples resolving to the same image
//! are expected.

use crate::config::EngineConfig;
use crate::models::{ForecastSample, SunTimes, TimelineEntry};
use crate::services::resolver::{resolve_skyline_with, resolve_tower_with};

/// Project the skyline family over a forecast sequence.
///
/// # Arguments
/// * `samples` - Hourly (timestamp, condition) samples, strictly
///   increasing timestamps by provider contract
/// * `today` - Today's sunrise/sunset pair; its sunrise date defines
///   which samples count as "today"
/// * `tomorrow` - Tomorrow's real pair, if the provider had it
pub fn generate_timeline(
    samples: &[ForecastSample],
    today: SunTimes,
    tomorrow: Option<SunTimes>,
    config: &EngineConfig,
) -> Vec<TimelineEntry> {
    let today_date = today.sunrise.date();
    let tomorrow = tomorrow.unwrap_or_else(|| {
        log::debug!("tomorrow's sun times unavailable, shifting today's by 24h");
        today.shifted_by_one_day()
    });

    samples
        .iter()
        .map(|sample| {
            let sun = if sample.timestamp.date() == today_date {
                today
            } else {
                tomorrow
            };
            let asset = resolve_skyline_with(
                config,
                sample.timestamp,
                sample.condition,
                Some(sun.sunrise),
                Some(sun.sunset),
            );
            TimelineEntry::new(sample.timestamp, asset)
        })
        .collect()
}

/// Project the tower family over a forecast sequence.
///
/// The air-quality index and lunar flag are per-horizon, not per-sample:
/// the night palette previews one "tomorrow" forecast across the whole
/// projection window.
pub fn generate_tower_timeline(
    samples: &[ForecastSample],
    today: SunTimes,
    tomorrow: Option<SunTimes>,
    air_quality_index: Option<u8>,
    full_moon: bool,
    config: &EngineConfig,
) -> Vec<TimelineEntry> {
    let today_date = today.sunrise.date();
    let tomorrow = tomorrow.unwrap_or_else(|| {
        log::debug!("tomorrow's sun times unavailable, shifting today's by 24h");
        today.shifted_by_one_day()
    });

    samples
        .iter()
        .map(|sample| {
            let sun = if sample.timestamp.date() == today_date {
                today
            } else {
                tomorrow
            };
            let asset = resolve_tower_with(
                config,
                sample.timestamp,
                sample.condition,
                Some(sun.sunrise),
                Some(sun.sunset),
                air_quality_index,
                full_moon,
            );
            TimelineEntry::new(sample.timestamp, asset)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherCondition;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(day: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, day)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn today() -> SunTimes {
        SunTimes::new(dt(10, 8, 0), dt(10, 18, 0))
    }

    #[test]
    fn preserves_input_order_and_length() {
        let samples: Vec<ForecastSample> = (12..20)
            .map(|h| ForecastSample::new(dt(10, h, 0), WeatherCondition::Clear))
            .collect();
        let timeline = generate_timeline(&samples, today(), None, &EngineConfig::default());
        assert_eq!(timeline.len(), samples.len());
        for (entry, sample) in timeline.iter().zip(&samples) {
            assert_eq!(entry.timestamp, sample.timestamp);
        }
    }

    #[test]
    fn after_midnight_samples_use_tomorrows_sun_times() {
        // Tomorrow's sunrise at 06:00 puts 06:00 inside golden morning;
        // today's 08:00 pair would classify it as plain night.
        let tomorrow = SunTimes::new(dt(11, 6, 0), dt(11, 19, 0));
        let samples = vec![
            ForecastSample::new(dt(10, 23, 0), WeatherCondition::Clear),
            ForecastSample::new(dt(11, 0, 30), WeatherCondition::Clear),
            ForecastSample::new(dt(11, 6, 0), WeatherCondition::Clear),
        ];
        let timeline =
            generate_timeline(&samples, today(), Some(tomorrow), &EngineConfig::default());
        assert_eq!(timeline[0].asset.as_str(), "A_spring_night");
        assert_eq!(timeline[1].asset.as_str(), "A_spring_night");
        assert_eq!(timeline[2].asset.as_str(), "A_spring_golden");
    }

    #[test]
    fn missing_tomorrow_pair_estimates_from_today() {
        // Shifted pair keeps the 08:00 sunrise, so 08:00 next day is
        // golden morning even without real data.
        let samples = vec![ForecastSample::new(dt(11, 8, 0), WeatherCondition::Clear)];
        let timeline = generate_timeline(&samples, today(), None, &EngineConfig::default());
        assert_eq!(timeline[0].asset.as_str(), "A_spring_golden");
    }

    #[test]
    fn repeated_conditions_legitimately_repeat_identifiers() {
        let samples = vec![
            ForecastSample::new(dt(10, 12, 0), WeatherCondition::Rain),
            ForecastSample::new(dt(10, 13, 0), WeatherCondition::Rain),
            ForecastSample::new(dt(10, 14, 0), WeatherCondition::Drizzle),
        ];
        let timeline = generate_timeline(&samples, today(), None, &EngineConfig::default());
        assert_eq!(timeline[0].asset, timeline[1].asset);
        assert_eq!(timeline[1].asset, timeline[2].asset);
    }

    #[test]
    fn tower_timeline_flips_to_palette_at_night() {
        let samples = vec![
            ForecastSample::new(dt(10, 16, 0), WeatherCondition::Cloudy),
            ForecastSample::new(dt(10, 22, 0), WeatherCondition::Cloudy),
        ];
        let timeline = generate_tower_timeline(
            &samples,
            today(),
            None,
            Some(2),
            false,
            &EngineConfig::default(),
        );
        assert_eq!(timeline[0].asset.as_str(), "incity_cloudy_day");
        assert_eq!(timeline[1].asset.as_str(), "incity_night_green");
    }

    #[test]
    fn empty_forecast_yields_empty_timeline() {
        let timeline = generate_timeline(&[], today(), None, &EngineConfig::default());
        assert!(timeline.is_empty());
    }
}
