//! # scenery-engine
//!
//! Deterministic scenery selection for the Lyon weather widget.
//!
//! Given an instant in time and a handful of environmental inputs
//! (provider weather condition, sunrise/sunset, forecast air quality,
//! calendar date) the engine computes the identifier of the pre-rendered
//! image to display, and can project that computation over an hourly
//! forecast to pre-fill a display timeline.
//!
//! ## Features
//!
//! - Season, weather-category, and day/night/golden-hour classification
//! - Calendar overrides for recurring Lyon events, validated non-overlapping
//! - Air-quality LED palette for the tower family's night display
//! - Forward timeline projection over an hourly forecast
//!
//! The engine holds no state: every function is pure, total over its
//! inputs, and safe to call concurrently. Identical inputs always
//! produce identical identifiers, which the scheduler relies on when
//! pre-computing future entries.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use scenery_engine::{resolve_skyline, WeatherCondition};
//!
//! let noon = NaiveDate::from_ymd_opt(2026, 4, 10)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let sunrise = NaiveDate::from_ymd_opt(2026, 4, 10)
//!     .unwrap()
//!     .and_hms_opt(6, 52, 0)
//!     .unwrap();
//! let sunset = NaiveDate::from_ymd_opt(2026, 4, 10)
//!     .unwrap()
//!     .and_hms_opt(20, 14, 0)
//!     .unwrap();
//!
//! let asset = resolve_skyline(noon, WeatherCondition::Clear, Some(sunrise), Some(sunset));
//! assert_eq!(asset.as_str(), "A_spring_day");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::{EngineConfig, FallbackHours, GoldenHourMargins};
pub use core::{
    builtin_events, AirQualityLevel, CalendarEvent, DateRange, EventRegistry, Season, TimeSlot,
    WeatherCategory,
};
pub use error::{Error, Result};
pub use models::{AssetId, ForecastSample, SunTimes, TimelineEntry, WeatherCondition};
pub use parsing::parse_forecast_json;
pub use services::{
    generate_timeline, generate_tower_timeline, resolve_skyline, resolve_skyline_with,
    resolve_tower, resolve_tower_with,
};
