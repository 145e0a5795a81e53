use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use stratus::ForecastResolver;
use stratus_middleware::RateLimiter;
use stratus_types::{Coordinate, WeatherError, WeatherSummary};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

const BAD_COORDS: &str = "Query parameters 'lat' and 'lon' are required and must be numbers.";
const NOT_FOUND: &str = "Route not found. Please use /weather?lat=...&lon=...";

/// Shared per-process state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Forecast pipeline; its caches are shared across requests.
    pub resolver: Arc<ForecastResolver>,
    /// Per-client request governor.
    pub rate_limiter: Arc<RateLimiter>,
}

/// Build the service router.
///
/// `/health` answers before the rate-limit layer; `/weather` and the JSON
/// 404 fallback sit behind it, mirroring request-governance on everything a
/// client can reach.
pub fn app_router(state: AppState) -> Router {
    let governed = Router::new()
        .route("/weather", get(get_weather))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), govern));

    Router::new()
        .route("/health", get(health))
        .merge(governed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw query parameters, parsed by hand so the error body matches the
/// documented contract instead of axum's rejection text.
#[derive(Debug, Deserialize)]
struct WeatherParams {
    lat: Option<String>,
    lon: Option<String>,
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherSummary>, ApiError> {
    let coordinate = parse_coordinate(&params)?;
    let summary = state.resolver.today_summary(&coordinate).await?;
    Ok(Json(summary))
}

fn parse_coordinate(params: &WeatherParams) -> Result<Coordinate, ApiError> {
    let lat = parse_axis(params.lat.as_deref())?;
    let lon = parse_axis(params.lon.as_deref())?;
    Ok(Coordinate::new(lat, lon)?)
}

fn parse_axis(raw: Option<&str>) -> Result<f64, ApiError> {
    raw.and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| ApiError(WeatherError::validation(BAD_COORDS)))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": NOT_FOUND }))).into_response()
}

/// Rate-limit layer keyed by the connection's apparent source address.
///
/// When no address is available (e.g. in-process test calls), all clients
/// share the `"unknown"` bucket; a fairness weakness, not a correctness bug.
async fn govern(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(
            || "unknown".to_string(),
            |ConnectInfo(addr)| addr.ip().to_string(),
        );

    match state.rate_limiter.admit(&client) {
        Ok(()) => next.run(request).await,
        Err(err) => ApiError(err).into_response(),
    }
}
