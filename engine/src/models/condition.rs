//! Provider weather condition codes.
//!
//! The weather provider reports conditions as an enumerated code with
//! camelCase wire names. The engine never constructs these values; they
//! arrive from the (out-of-scope) provider adapter and are read-only
//! inputs to classification.

use serde::{Deserialize, Serialize};

/// A weather condition code as reported by the provider.
///
/// The set mirrors the provider's published vocabulary. Codes added by
/// the provider after this enum was written do not parse into a variant;
/// classification handles them through the cloudy default instead
/// (see [`crate::core::WeatherCategory::from_provider_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherCondition {
    Blizzard,
    BlowingDust,
    BlowingSnow,
    Breezy,
    Clear,
    Cloudy,
    Drizzle,
    Flurries,
    Foggy,
    FreezingDrizzle,
    FreezingRain,
    Frigid,
    Hail,
    Haze,
    HeavyRain,
    HeavySnow,
    Hot,
    Hurricane,
    IsolatedThunderstorms,
    MostlyClear,
    MostlyCloudy,
    PartlyCloudy,
    Rain,
    ScatteredThunderstorms,
    Sleet,
    Smoky,
    Snow,
    StrongStorms,
    SunFlurries,
    SunShowers,
    Thunderstorms,
    TropicalStorm,
    Windy,
    WintryMix,
}

impl WeatherCondition {
    /// Every condition code the provider currently publishes.
    pub const ALL: [WeatherCondition; 34] = [
        WeatherCondition::Blizzard,
        WeatherCondition::BlowingDust,
        WeatherCondition::BlowingSnow,
        WeatherCondition::Breezy,
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Drizzle,
        WeatherCondition::Flurries,
        WeatherCondition::Foggy,
        WeatherCondition::FreezingDrizzle,
        WeatherCondition::FreezingRain,
        WeatherCondition::Frigid,
        WeatherCondition::Hail,
        WeatherCondition::Haze,
        WeatherCondition::HeavyRain,
        WeatherCondition::HeavySnow,
        WeatherCondition::Hot,
        WeatherCondition::Hurricane,
        WeatherCondition::IsolatedThunderstorms,
        WeatherCondition::MostlyClear,
        WeatherCondition::MostlyCloudy,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Rain,
        WeatherCondition::ScatteredThunderstorms,
        WeatherCondition::Sleet,
        WeatherCondition::Smoky,
        WeatherCondition::Snow,
        WeatherCondition::StrongStorms,
        WeatherCondition::SunFlurries,
        WeatherCondition::SunShowers,
        WeatherCondition::Thunderstorms,
        WeatherCondition::TropicalStorm,
        WeatherCondition::Windy,
        WeatherCondition::WintryMix,
    ];

    /// Parse a provider wire code into a condition.
    ///
    /// Returns `None` for codes outside the published vocabulary, which
    /// downstream classification treats as cloudy.
    pub fn from_provider_code(code: &str) -> Option<Self> {
        match code {
            "blizzard" => Some(WeatherCondition::Blizzard),
            "blowingDust" => Some(WeatherCondition::BlowingDust),
            "blowingSnow" => Some(WeatherCondition::BlowingSnow),
            "breezy" => Some(WeatherCondition::Breezy),
            "clear" => Some(WeatherCondition::Clear),
            "cloudy" => Some(WeatherCondition::Cloudy),
            "drizzle" => Some(WeatherCondition::Drizzle),
            "flurries" => Some(WeatherCondition::Flurries),
            "foggy" => Some(WeatherCondition::Foggy),
            "freezingDrizzle" => Some(WeatherCondition::FreezingDrizzle),
            "freezingRain" => Some(WeatherCondition::FreezingRain),
            "frigid" => Some(WeatherCondition::Frigid),
            "hail" => Some(WeatherCondition::Hail),
            "haze" => Some(WeatherCondition::Haze),
            "heavyRain" => Some(WeatherCondition::HeavyRain),
            "heavySnow" => Some(WeatherCondition::HeavySnow),
            "hot" => Some(WeatherCondition::Hot),
            "hurricane" => Some(WeatherCondition::Hurricane),
            "isolatedThunderstorms" => Some(WeatherCondition::IsolatedThunderstorms),
            "mostlyClear" => Some(WeatherCondition::MostlyClear),
            "mostlyCloudy" => Some(WeatherCondition::MostlyCloudy),
            "partlyCloudy" => Some(WeatherCondition::PartlyCloudy),
            "rain" => Some(WeatherCondition::Rain),
            "scatteredThunderstorms" => Some(WeatherCondition::ScatteredThunderstorms),
            "sleet" => Some(WeatherCondition::Sleet),
            "smoky" => Some(WeatherCondition::Smoky),
            "snow" => Some(WeatherCondition::Snow),
            "strongStorms" => Some(WeatherCondition::StrongStorms),
            "sunFlurries" => Some(WeatherCondition::SunFlurries),
            "sunShowers" => Some(WeatherCondition::SunShowers),
            "thunderstorms" => Some(WeatherCondition::Thunderstorms),
            "tropicalStorm" => Some(WeatherCondition::TropicalStorm),
            "windy" => Some(WeatherCondition::Windy),
            "wintryMix" => Some(WeatherCondition::WintryMix),
            _ => None,
        }
    }

    /// The provider wire code for this condition.
    pub fn provider_code(self) -> &'static str {
        match self {
            WeatherCondition::Blizzard => "blizzard",
            WeatherCondition::BlowingDust => "blowingDust",
            WeatherCondition::BlowingSnow => "blowingSnow",
            WeatherCondition::Breezy => "breezy",
            WeatherCondition::Clear => "clear",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Drizzle => "drizzle",
            WeatherCondition::Flurries => "flurries",
            WeatherCondition::Foggy => "foggy",
            WeatherCondition::FreezingDrizzle => "freezingDrizzle",
            WeatherCondition::FreezingRain => "freezingRain",
            WeatherCondition::Frigid => "frigid",
            WeatherCondition::Hail => "hail",
            WeatherCondition::Haze => "haze",
            WeatherCondition::HeavyRain => "heavyRain",
            WeatherCondition::HeavySnow => "heavySnow",
            WeatherCondition::Hot => "hot",
            WeatherCondition::Hurricane => "hurricane",
            WeatherCondition::IsolatedThunderstorms => "isolatedThunderstorms",
            WeatherCondition::MostlyClear => "mostlyClear",
            WeatherCondition::MostlyCloudy => "mostlyCloudy",
            WeatherCondition::PartlyCloudy => "partlyCloudy",
            WeatherCondition::Rain => "rain",
            WeatherCondition::ScatteredThunderstorms => "scatteredThunderstorms",
            WeatherCondition::Sleet => "sleet",
            WeatherCondition::Smoky => "smoky",
            WeatherCondition::Snow => "snow",
            WeatherCondition::StrongStorms => "strongStorms",
            WeatherCondition::SunFlurries => "sunFlurries",
            WeatherCondition::SunShowers => "sunShowers",
            WeatherCondition::Thunderstorms => "thunderstorms",
            WeatherCondition::TropicalStorm => "tropicalStorm",
            WeatherCondition::Windy => "windy",
            WeatherCondition::WintryMix => "wintryMix",
        }
    }
}
