//! Air-quality night palette for the tower family.
//!
//! At night the tower is naturally dark and its LED crown is lit with a
//! colour previewing tomorrow's forecast air quality. The palette only
//! applies to the tower family and only in the night slot.

use serde::{Deserialize, Serialize};

use crate::models::AssetId;

/// Ordinal air-quality level derived from the provider's 1-6 index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AirQualityLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirQualityLevel {
    /// Map the provider index to a level.
    ///
    /// Indices 5 and 6 collapse onto the worst level, and so does any
    /// out-of-range or absent value: when the forecast is unknown the
    /// display errs on the side of the worst case rather than failing.
    pub fn from_index(index: Option<u8>) -> AirQualityLevel {
        match index {
            Some(1) => AirQualityLevel::Good,
            Some(2) => AirQualityLevel::Fair,
            Some(3) => AirQualityLevel::Moderate,
            Some(4) => AirQualityLevel::Poor,
            _ => AirQualityLevel::VeryPoor,
        }
    }

    /// LED colour name used in the asset file stems.
    pub fn led_color(self) -> &'static str {
        match self {
            AirQualityLevel::Good => "cyan",
            AirQualityLevel::Fair => "green",
            AirQualityLevel::Moderate => "yellow",
            AirQualityLevel::Poor => "red",
            AirQualityLevel::VeryPoor => "purple",
        }
    }

    /// Night image for this level, with the full-moon variant when the
    /// lunar flag is set.
    pub fn night_asset(self, full_moon: bool) -> AssetId {
        let scene = if full_moon { "fullmoon" } else { "night" };
        AssetId::new(format!("incity_{}_{}", scene, self.led_color()))
    }
}
