//! Serde wire types for the two NWS endpoints the pipeline consumes.
//!
//! Field presence is deliberately loose (`Option` / `#[serde(default)]`):
//! a structurally valid but incomplete payload decodes fine and is rejected
//! later as a contract violation, so that decode failures stay reserved for
//! genuinely malformed bodies.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Response from `/points/{lat},{lon}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    /// GeoJSON `properties` object.
    pub properties: PointsProperties,
}

/// `properties` of a points response.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsProperties {
    /// URL of the grid-cell forecast endpoint; `None` on incomplete payloads.
    #[serde(default)]
    pub forecast: Option<String>,
}

/// Response from a grid-cell forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// GeoJSON `properties` object.
    pub properties: ForecastProperties,
}

/// `properties` of a forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    /// Ordered forecast intervals; empty on incomplete payloads.
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

/// One upstream forecast interval, e.g. "Today" or "Tonight".
///
/// Immutable snapshot; never mutated after parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// Sequence number within the forecast.
    pub number: u32,
    /// Human-readable interval name.
    pub name: String,
    /// Interval start, with the grid cell's local offset.
    pub start_time: DateTime<FixedOffset>,
    /// Interval end.
    pub end_time: DateTime<FixedOffset>,
    /// Whether the interval covers daytime hours.
    pub is_daytime: bool,
    /// Temperature reading in `temperature_unit`.
    pub temperature: f64,
    /// Unit label for `temperature`, e.g. `"F"`.
    pub temperature_unit: String,
    /// One-line forecast description.
    pub short_forecast: String,
}
