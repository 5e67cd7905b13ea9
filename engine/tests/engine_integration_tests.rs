//! End-to-end tests of the resolution pipeline through the public API.

use chrono::{NaiveDate, NaiveDateTime};
use scenery_engine::{
    builtin_events, generate_timeline, generate_tower_timeline, parse_forecast_json,
    resolve_skyline, resolve_tower, EngineConfig, ForecastSample, Season, SunTimes, TimeSlot,
    WeatherCategory, WeatherCondition,
};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn season_boundaries_land_on_the_documented_side() {
    assert_eq!(Season::from_month_day(3, 19), Season::Winter);
    assert_eq!(Season::from_month_day(3, 20), Season::Spring);
    assert_eq!(Season::from_month_day(6, 20), Season::Spring);
    assert_eq!(Season::from_month_day(6, 21), Season::Summer);
    assert_eq!(Season::from_month_day(9, 21), Season::Summer);
    assert_eq!(Season::from_month_day(9, 22), Season::Autumn);
    assert_eq!(Season::from_month_day(12, 20), Season::Autumn);
    assert_eq!(Season::from_month_day(12, 21), Season::Winter);
}

#[test]
fn category_is_total_over_the_provider_vocabulary() {
    for condition in WeatherCondition::ALL {
        // Classification must return one of the five categories.
        let _ = WeatherCategory::from_condition(condition);
    }
    assert_eq!(
        WeatherCategory::from_provider_code("someFutureCode"),
        WeatherCategory::Cloudy
    );
}

#[test]
fn slot_table_for_0800_sunrise_1800_sunset() {
    let config = EngineConfig::default();
    let sr = Some(dt(2026, 3, 10, 8, 0));
    let ss = Some(dt(2026, 3, 10, 18, 0));
    let slot = |h, min| TimeSlot::classify(dt(2026, 3, 10, h, min), sr, ss, &config);

    assert_eq!(slot(7, 31), TimeSlot::GoldenMorning);
    assert_eq!(slot(8, 46), TimeSlot::Day);
    assert_eq!(slot(17, 14), TimeSlot::Day);
    assert_eq!(slot(17, 16), TimeSlot::GoldenEvening);
    assert_eq!(slot(18, 31), TimeSlot::Night);
    assert_eq!(slot(3, 0), TimeSlot::Night);
}

#[test]
fn december_25_overrides_every_condition() {
    let sr = Some(dt(2026, 12, 25, 8, 12));
    let ss = Some(dt(2026, 12, 25, 16, 58));
    for condition in WeatherCondition::ALL {
        let asset = resolve_skyline(dt(2026, 12, 25, 14, 0), condition, sr, ss);
        assert_eq!(asset.as_str(), "F_noel_day");
    }
}

#[test]
fn snow_collapses_both_golden_slots() {
    let sr = Some(dt(2026, 1, 20, 8, 0));
    let ss = Some(dt(2026, 1, 20, 18, 0));
    let morning = resolve_skyline(dt(2026, 1, 20, 8, 10), WeatherCondition::Snow, sr, ss);
    let evening = resolve_skyline(dt(2026, 1, 20, 17, 30), WeatherCondition::Snow, sr, ss);
    let day = resolve_skyline(dt(2026, 1, 20, 12, 0), WeatherCondition::Snow, sr, ss);
    let night = resolve_skyline(dt(2026, 1, 20, 23, 0), WeatherCondition::Snow, sr, ss);

    assert_eq!(morning, evening);
    assert_eq!(morning.as_str(), "D_snow_golden");
    assert_ne!(day, night);
}

#[test]
fn winter_storm_is_hour_independent() {
    let sr = Some(dt(2026, 1, 20, 8, 0));
    let ss = Some(dt(2026, 1, 20, 18, 0));
    let at_3 = resolve_skyline(dt(2026, 1, 20, 3, 0), WeatherCondition::Thunderstorms, sr, ss);
    let at_14 = resolve_skyline(dt(2026, 1, 20, 14, 0), WeatherCondition::Thunderstorms, sr, ss);
    assert_eq!(at_3, at_14);
    assert_eq!(at_3.as_str(), "E_storm_winter");
}

#[test]
fn night_palette_levels_and_moon_variant() {
    let sr = Some(dt(2026, 4, 10, 8, 0));
    let ss = Some(dt(2026, 4, 10, 18, 0));
    let night = dt(2026, 4, 10, 23, 0);

    let good = resolve_tower(night, WeatherCondition::Clear, sr, ss, Some(1), false);
    assert_eq!(good.as_str(), "incity_night_cyan");

    let good_moon = resolve_tower(night, WeatherCondition::Clear, sr, ss, Some(1), true);
    assert_eq!(good_moon.as_str(), "incity_fullmoon_cyan");

    let absent = resolve_tower(night, WeatherCondition::Clear, sr, ss, None, false);
    let worst5 = resolve_tower(night, WeatherCondition::Clear, sr, ss, Some(5), false);
    let worst6 = resolve_tower(night, WeatherCondition::Clear, sr, ss, Some(6), false);
    assert_eq!(absent, worst5);
    assert_eq!(absent, worst6);
    assert_eq!(absent.as_str(), "incity_night_purple");
}

#[test]
fn timeline_crosses_the_day_boundary_with_tomorrows_pair() {
    let today = SunTimes::new(dt(2026, 4, 10, 8, 0), dt(2026, 4, 10, 18, 0));
    // Tomorrow's sunrise an hour earlier makes the difference observable
    // at 07:10, golden with tomorrow's pair but night with today's.
    let tomorrow = SunTimes::new(dt(2026, 4, 11, 7, 0), dt(2026, 4, 11, 19, 0));

    let samples = vec![
        ForecastSample::new(dt(2026, 4, 11, 0, 30), WeatherCondition::Clear),
        ForecastSample::new(dt(2026, 4, 11, 7, 10), WeatherCondition::Clear),
    ];
    let timeline = generate_timeline(&samples, today, Some(tomorrow), &EngineConfig::default());
    assert_eq!(timeline[0].asset.as_str(), "A_spring_night");
    assert_eq!(timeline[1].asset.as_str(), "A_spring_golden");
}

#[test]
fn resolve_has_no_hidden_state() {
    let sr = Some(dt(2026, 4, 10, 8, 0));
    let ss = Some(dt(2026, 4, 10, 18, 0));
    let first = resolve_skyline(dt(2026, 4, 10, 15, 0), WeatherCondition::Rain, sr, ss);
    for _ in 0..10 {
        assert_eq!(
            resolve_skyline(dt(2026, 4, 10, 15, 0), WeatherCondition::Rain, sr, ss),
            first
        );
    }
}

#[test]
fn forecast_json_feeds_the_timeline_end_to_end() {
    let json = r#"[
        {"forecastStart": "2026-04-10T12:00:00", "conditionCode": "clear"},
        {"forecastStart": "2026-04-10T13:00:00", "conditionCode": "rain"},
        {"forecastStart": "2026-04-10T22:00:00", "conditionCode": "rain"}
    ]"#;
    let samples = parse_forecast_json(json).unwrap();
    let today = SunTimes::new(dt(2026, 4, 10, 8, 0), dt(2026, 4, 10, 18, 0));

    let timeline = generate_timeline(&samples, today, None, &EngineConfig::default());
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0].asset.as_str(), "A_spring_day");
    assert_eq!(timeline[1].asset.as_str(), "C_spring_rain_day");
    assert_eq!(timeline[2].asset.as_str(), "C_spring_rain_night");
}

#[test]
fn tower_timeline_keeps_one_palette_across_the_horizon() {
    let today = SunTimes::new(dt(2026, 4, 10, 8, 0), dt(2026, 4, 10, 18, 0));
    let samples: Vec<ForecastSample> = [21, 22, 23]
        .iter()
        .map(|&h| ForecastSample::new(dt(2026, 4, 10, h, 0), WeatherCondition::Clear))
        .collect();

    let timeline = generate_tower_timeline(
        &samples,
        today,
        None,
        Some(4),
        false,
        &EngineConfig::default(),
    );
    for entry in &timeline {
        assert_eq!(entry.asset.as_str(), "incity_night_red");
    }
}

#[test]
fn builtin_event_table_is_validated_once() {
    // Accessing the registry twice must hand back the same validated table.
    let a = builtin_events();
    let b = builtin_events();
    assert_eq!(a.events().len(), b.events().len());
}
