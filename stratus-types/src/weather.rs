//! Request-scoped domain values: coordinates, categories, and the final
//! summary shape returned to clients.

use serde::{Deserialize, Serialize};

use crate::WeatherError;

/// Client-facing message for a coordinate outside Earth bounds.
const OUT_OF_RANGE: &str =
    "Latitude must be between -90 and 90, and longitude between -180 and 180.";

/// A validated (latitude, longitude) pair.
///
/// Constructed once per request and never stored beyond request scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Validate and build a coordinate.
    ///
    /// # Errors
    /// Returns [`WeatherError::Validation`] when either axis is non-finite
    /// or outside `[-90, 90]` / `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self, WeatherError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(WeatherError::validation(OUT_OF_RANGE));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Stable cache-key fragment: both axes rounded to 4 decimal digits.
    ///
    /// Nearby lookups collapse onto one key and float noise in the query
    /// string cannot fragment the cache.
    #[must_use]
    pub fn rounded_key(&self) -> String {
        format!("{:.4},{:.4}", self.lat, self.lon)
    }
}

/// Classification buckets for a Fahrenheit temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    /// At or above 85 °F.
    Hot,
    /// At or below 45 °F.
    Cold,
    /// Everything in between.
    Moderate,
}

/// Classify a Fahrenheit reading into hot / cold / moderate.
#[must_use]
pub fn classify_fahrenheit(temp_f: f64) -> TemperatureCategory {
    if temp_f >= 85.0 {
        TemperatureCategory::Hot
    } else if temp_f <= 45.0 {
        TemperatureCategory::Cold
    } else {
        TemperatureCategory::Moderate
    }
}

/// Upstream temperature reading, value and unit exactly as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Numeric reading in the upstream unit.
    pub value: f64,
    /// Upstream unit label, e.g. `"F"` or `"C"`.
    pub unit: String,
}

/// Final response shape for a resolved coordinate.
///
/// Derived, stateless, produced fresh per request. The temperature keeps the
/// original upstream value/unit; only `category` is computed from the
/// Fahrenheit-normalized reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    /// Requested latitude.
    pub lat: f64,
    /// Requested longitude.
    pub lon: f64,
    /// Upstream one-line forecast description.
    pub short_forecast: String,
    /// Original upstream reading.
    pub temperature: Temperature,
    /// Derived classification.
    pub category: TemperatureCategory,
}
