//! Parsers for provider payloads.
//!
//! # Parsers
//!
//! - [`forecast_parser`]: Parse the hourly forecast JSON into
//!   [`crate::models::ForecastSample`]s

pub mod forecast_parser;


pub use forecast_parser::parse_forecast_json;
