//! Engine configuration file support.
//!
//! All tunable constants of the resolution pipeline live here: the
//! golden-hour margins around sunrise/sunset and the fixed-hour fallback
//! boundaries used when astronomical data is unavailable. Defaults carry
//! the exact values the asset set was tuned against; overriding them is
//! possible through a TOML file but changes which images are picked at
//! the slot boundaries.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Margins delimiting the golden-hour windows, in minutes.
///
/// The margins are asymmetric on purpose: morning light ramps up faster
/// after sunrise than evening light fades after sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenHourMargins {
    /// Minutes before sunrise where golden morning starts.
    #[serde(default = "default_before_sunrise")]
    pub before_sunrise_min: i64,
    /// Minutes after sunrise where golden morning ends (day starts).
    #[serde(default = "default_after_sunrise")]
    pub after_sunrise_min: i64,
    /// Minutes before sunset where golden evening starts (day ends).
    #[serde(default = "default_before_sunset")]
    pub before_sunset_min: i64,
    /// Minutes after sunset where golden evening ends (night starts).
    #[serde(default = "default_after_sunset")]
    pub after_sunset_min: i64,
}

fn default_before_sunrise() -> i64 {
    30
}

fn default_after_sunrise() -> i64 {
    45
}

fn default_before_sunset() -> i64 {
    45
}

fn default_after_sunset() -> i64 {
    30
}

impl Default for GoldenHourMargins {
    fn default() -> Self {
        Self {
            before_sunrise_min: default_before_sunrise(),
            after_sunrise_min: default_after_sunrise(),
            before_sunset_min: default_before_sunset(),
            after_sunset_min: default_after_sunset(),
        }
    }
}

/// Fixed-hour slot boundaries used when sunrise or sunset is unknown.
///
/// Slots are half-open on the hour: golden morning `[golden_morning_start,
/// day_start)`, day `[day_start, golden_evening_start)`, golden evening
/// `[golden_evening_start, night_start)`, night otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackHours {
    #[serde(default = "default_golden_morning_start")]
    pub golden_morning_start: u32,
    #[serde(default = "default_day_start")]
    pub day_start: u32,
    #[serde(default = "default_golden_evening_start")]
    pub golden_evening_start: u32,
    #[serde(default = "default_night_start")]
    pub night_start: u32,
}

fn default_golden_morning_start() -> u32 {
    7
}

fn default_day_start() -> u32 {
    9
}

fn default_golden_evening_start() -> u32 {
    17
}

fn default_night_start() -> u32 {
    19
}

impl Default for FallbackHours {
    fn default() -> Self {
        Self {
            golden_morning_start: default_golden_morning_start(),
            day_start: default_day_start(),
            golden_evening_start: default_golden_evening_start(),
            night_start: default_night_start(),
        }
    }
}

/// Engine configuration loaded from file or built from defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub golden_hour: GoldenHourMargins,
    #[serde(default)]
    pub fallback_hours: FallbackHours,
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if the file parses and validates
    /// * `Err(Error)` if the file cannot be read, parsed, or is inconsistent
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Io(format!("failed to read config file: {}", e)))?;

        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `scenery.toml` in the current directory, the
    /// `engine/` directory, and the parent directory. Falls back to the
    /// built-in defaults when no file is found.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = vec![
            PathBuf::from("scenery.toml"),
            PathBuf::from("engine/scenery.toml"),
            PathBuf::from("../scenery.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Check internal consistency of the configured boundaries.
    pub fn validate(&self) -> Result<()> {
        let g = &self.golden_hour;
        if g.before_sunrise_min < 0
            || g.after_sunrise_min < 0
            || g.before_sunset_min < 0
            || g.after_sunset_min < 0
        {
            return Err(Error::Configuration(
                "golden-hour margins must be non-negative".to_string(),
            ));
        }

        let f = &self.fallback_hours;
        if f.night_start > 24 {
            return Err(Error::Configuration(format!(
                "fallback night_start {} exceeds 24",
                f.night_start
            )));
        }
        if !(f.golden_morning_start < f.day_start
            && f.day_start < f.golden_evening_start
            && f.golden_evening_start < f.night_start)
        {
            return Err(Error::Configuration(
                "fallback hour boundaries must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }
}
