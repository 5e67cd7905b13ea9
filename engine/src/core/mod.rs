//! Classifiers feeding the asset resolver.
//!
//! Each classifier is a pure, total function over its inputs: dates to
//! seasons, provider codes to categories, timestamps to lighting slots,
//! air-quality indices to palette levels, and dates to calendar
//! overrides. None of them can fail at resolution time.

pub mod air_quality;
pub mod category;
pub mod daylight;
pub mod events;
pub mod season;

pub use air_quality::AirQualityLevel;
pub use category::WeatherCategory;
pub use daylight::TimeSlot;
pub use events::{builtin_events, CalendarEvent, DateRange, EventRegistry};
pub use season::Season;
