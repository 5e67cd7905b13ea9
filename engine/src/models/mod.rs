//! Input and output data types of the engine.
//!
//! Everything here is an immutable value: conditions and sun times come
//! in from the provider adapters, asset identifiers and timeline
//! entries go out to the presentation layer and the scheduler.

pub mod asset;
pub mod condition;
pub mod forecast;

pub use asset::AssetId;
pub use condition::WeatherCondition;
pub use forecast::{ForecastSample, SunTimes, TimelineEntry};
