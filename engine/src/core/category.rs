//! Coarse weather category classification.
//!
//! The provider's ~34 condition codes collapse onto five categories that
//! key the asset set. The partition is built under the precedence
//! stormy > snowy > rainy > cloudy > clear: a code that plausibly fits
//! two categories sits in the higher-precedence one (freezing rain is
//! snowy, not rainy; hail rides with storm systems).

use serde::{Deserialize, Serialize};

use crate::models::WeatherCondition;

/// One of the five coarse weather categories used for asset selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl WeatherCategory {
    /// Classify a provider condition into its category.
    ///
    /// Total over the condition vocabulary; the match is exhaustive so a
    /// new enum variant fails to compile rather than silently falling
    /// through.
    pub fn from_condition(condition: WeatherCondition) -> WeatherCategory {
        use WeatherCondition::*;
        match condition {
            Thunderstorms | IsolatedThunderstorms | ScatteredThunderstorms | StrongStorms
            | Hurricane | TropicalStorm | Hail => WeatherCategory::Stormy,

            Snow | HeavySnow | Flurries | SunFlurries | Blizzard | BlowingSnow | Sleet
            | WintryMix | FreezingRain | FreezingDrizzle => WeatherCategory::Snowy,

            Rain | HeavyRain | Drizzle | SunShowers => WeatherCategory::Rainy,

            Cloudy | MostlyCloudy | PartlyCloudy | Foggy | Haze | Smoky | BlowingDust => {
                WeatherCategory::Cloudy
            }

            Clear | MostlyClear | Breezy | Windy | Hot | Frigid => WeatherCategory::Clear,
        }
    }

    /// Classify a raw provider wire code.
    ///
    /// Codes outside the published vocabulary (new provider values, typos
    /// in cached data) degrade to cloudy, the safe visual default.
    pub fn from_provider_code(code: &str) -> WeatherCategory {
        match WeatherCondition::from_provider_code(code) {
            Some(condition) => WeatherCategory::from_condition(condition),
            None => {
                log::warn!("unknown weather condition code '{}', using cloudy", code);
                WeatherCategory::Cloudy
            }
        }
    }

    /// Lowercase name of the category.
    pub fn name(self) -> &'static str {
        match self {
            WeatherCategory::Clear => "clear",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Rainy => "rainy",
            WeatherCategory::Snowy => "snowy",
            WeatherCategory::Stormy => "stormy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WeatherCondition::*;

    #[test]
    fn storm_codes_outrank_rain() {
        // Severe conditions that also carry precipitation must land in
        // stormy, per the partition precedence.
        for c in [
            Thunderstorms,
            IsolatedThunderstorms,
            ScatteredThunderstorms,
            StrongStorms,
            Hurricane,
            TropicalStorm,
            Hail,
        ] {
            assert_eq!(WeatherCategory::from_condition(c), WeatherCategory::Stormy);
        }
    }

    #[test]
    fn frozen_precipitation_is_snowy() {
        for c in [
            Snow,
            HeavySnow,
            Flurries,
            SunFlurries,
            Blizzard,
            BlowingSnow,
            Sleet,
            WintryMix,
            FreezingRain,
            FreezingDrizzle,
        ] {
            assert_eq!(WeatherCategory::from_condition(c), WeatherCategory::Snowy);
        }
    }

    #[test]
    fn liquid_precipitation_is_rainy() {
        for c in [Rain, HeavyRain, Drizzle, SunShowers] {
            assert_eq!(WeatherCategory::from_condition(c), WeatherCategory::Rainy);
        }
    }

    #[test]
    fn obscured_sky_is_cloudy() {
        for c in [Cloudy, MostlyCloudy, PartlyCloudy, Foggy, Haze, Smoky, BlowingDust] {
            assert_eq!(WeatherCategory::from_condition(c), WeatherCategory::Cloudy);
        }
    }

    #[test]
    fn open_sky_is_clear() {
        // Temperature and wind extremes do not obscure the sky.
        for c in [Clear, MostlyClear, Breezy, Windy, Hot, Frigid] {
            assert_eq!(WeatherCategory::from_condition(c), WeatherCategory::Clear);
        }
    }

    #[test]
    fn classification_is_total() {
        // Every published code maps, both as variant and as wire string.
        for condition in WeatherCondition::ALL {
            let by_variant = WeatherCategory::from_condition(condition);
            let by_code = WeatherCategory::from_provider_code(condition.provider_code());
            assert_eq!(by_variant, by_code);
        }
    }

    #[test]
    fn unknown_codes_default_to_cloudy() {
        assert_eq!(
            WeatherCategory::from_provider_code("meteorShower"),
            WeatherCategory::Cloudy
        );
        assert_eq!(WeatherCategory::from_provider_code(""), WeatherCategory::Cloudy);
    }
}
