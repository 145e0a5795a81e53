use std::time::Duration;

use async_trait::async_trait;
use stratus_types::{Coordinate, WeatherError};
use tracing::debug;

use crate::types::{ForecastResponse, PointsResponse};

/// Production NWS endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

const ACCEPT_GEO_JSON: &str = "application/geo+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream surface the resolver depends on, as a trait so tests can inject
/// stubs instead of a live endpoint.
#[async_trait]
pub trait NwsApi: Send + Sync {
    /// Fetch the points metadata for a coordinate.
    async fn points(&self, coordinate: &Coordinate) -> Result<PointsResponse, WeatherError>;

    /// Fetch the period list from a previously resolved forecast URL.
    async fn forecast(&self, forecast_url: &str) -> Result<ForecastResponse, WeatherError>;
}

/// Production client backed by `reqwest`.
///
/// NWS requires a contact-bearing `User-Agent`, so callers supply one at
/// construction time. Connect failures, timeouts, non-2xx statuses, and
/// undecodable bodies all surface as [`WeatherError::Transport`].
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NwsClient {
    /// Build a client against `base_url`, identifying as `user_agent`.
    ///
    /// # Errors
    /// Returns [`WeatherError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, WeatherError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT_GEO_JSON),
        );
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, WeatherError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(url, "fetching from NWS");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        response.json::<T>().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> WeatherError {
    WeatherError::transport(err.to_string())
}

#[async_trait]
impl NwsApi for NwsClient {
    async fn points(&self, coordinate: &Coordinate) -> Result<PointsResponse, WeatherError> {
        let url = format!(
            "{}/points/{},{}",
            self.base_url,
            coordinate.lat(),
            coordinate.lon()
        );
        self.get_json(&url).await
    }

    async fn forecast(&self, forecast_url: &str) -> Result<ForecastResponse, WeatherError> {
        self.get_json(forecast_url).await
    }
}
