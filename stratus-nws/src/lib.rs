//! stratus-nws
//!
//! Connector for the National Weather Service API (`api.weather.gov`).
//! Exposes the two-call resolution surface the forecast pipeline needs:
//! coordinate → points metadata, forecast URL → period list.
#![warn(missing_docs)]

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, NwsApi, NwsClient};
pub use types::{
    ForecastPeriod, ForecastProperties, ForecastResponse, PointsProperties, PointsResponse,
};
