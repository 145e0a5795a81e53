//! Stratus-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod weather;

pub use config::{CacheConfig, RateLimitConfig, RetryConfig};
pub use error::WeatherError;
pub use weather::{
    Coordinate, Temperature, TemperatureCategory, WeatherSummary, classify_fahrenheit,
};
