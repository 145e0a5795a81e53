#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Days, FixedOffset, Local};
use stratus_nws::{
    ForecastPeriod, ForecastProperties, ForecastResponse, NwsApi, PointsProperties, PointsResponse,
};
use stratus_types::{Coordinate, WeatherError};

pub const FORECAST_URL: &str = "https://api.weather.gov/gridpoints/SEW/124,67/forecast";

/// Scripted NWS double that counts upstream calls.
pub struct StubNws {
    pub points_calls: AtomicUsize,
    pub forecast_calls: AtomicUsize,
    /// `None` simulates a points payload missing the forecast reference.
    pub forecast_ref: Option<String>,
    pub periods: Vec<ForecastPeriod>,
    /// When set, every points call fails with a transport error.
    pub points_down: bool,
    /// Artificial latency before answering, to widen cache-miss races.
    pub delay: Duration,
}

impl Default for StubNws {
    fn default() -> Self {
        Self {
            points_calls: AtomicUsize::new(0),
            forecast_calls: AtomicUsize::new(0),
            forecast_ref: Some(FORECAST_URL.to_string()),
            periods: vec![period("Today", today_start(), 72.0, "F")],
            points_down: false,
            delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl NwsApi for StubNws {
    async fn points(&self, _coordinate: &Coordinate) -> Result<PointsResponse, WeatherError> {
        self.points_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
        if self.points_down {
            return Err(WeatherError::transport("connection refused"));
        }
        Ok(PointsResponse {
            properties: PointsProperties {
                forecast: self.forecast_ref.clone(),
            },
        })
    }

    async fn forecast(&self, _forecast_url: &str) -> Result<ForecastResponse, WeatherError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
        Ok(ForecastResponse {
            properties: ForecastProperties {
                periods: self.periods.clone(),
            },
        })
    }
}

pub fn period(
    name: &str,
    start: DateTime<FixedOffset>,
    temperature: f64,
    unit: &str,
) -> ForecastPeriod {
    ForecastPeriod {
        number: 1,
        name: name.to_string(),
        start_time: start,
        end_time: start + chrono::Duration::hours(12),
        is_daytime: true,
        temperature,
        temperature_unit: unit.to_string(),
        short_forecast: "Partly sunny".to_string(),
    }
}

pub fn today_start() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

pub fn yesterday_start() -> DateTime<FixedOffset> {
    Local::now()
        .checked_sub_days(Days::new(1))
        .expect("date arithmetic")
        .fixed_offset()
}
