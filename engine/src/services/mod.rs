//! Service layer combining the classifiers into the public operations.
//!
//! [`resolver`] is the single-point decision function; [`timeline`]
//! projects it over a forecast horizon for the scheduler.

pub mod resolver;
pub mod timeline;

pub use resolver::{resolve_skyline, resolve_skyline_with, resolve_tower, resolve_tower_with};
pub use timeline::{generate_timeline, generate_tower_timeline};
