//! Error types for scenery-engine.
//!
//! The resolution pipeline itself is total and never fails; errors only
//! arise when constructing configuration or the calendar event registry.

use thiserror::Error;

/// Result type for scenery-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when setting up the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Two calendar events claim the same day of year.
    #[error("calendar events '{first}' and '{second}' are both active on {month:02}-{day:02}")]
    OverlappingEvents {
        first: String,
        second: String,
        month: u32,
        day: u32,
    },

    /// A calendar event range uses an impossible month/day.
    #[error("calendar event '{name}' has invalid date {month:02}-{day:02}")]
    InvalidEventDate { name: String, month: u32, day: u32 },

    /// Configuration value out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Forecast payload could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
