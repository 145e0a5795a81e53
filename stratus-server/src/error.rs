use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use stratus_types::WeatherError;
use tracing::error;

/// Fixed client-facing body for any unrecovered upstream failure. Upstream
/// detail goes to the operator log only.
const UPSTREAM_FAILURE: &str = "Failed to fetch forecast from National Weather Service.";
const RATE_LIMITED: &str = "Too many requests. Please try again later.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Boundary adapter from the pipeline's tagged errors to HTTP responses.
pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            WeatherError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
            WeatherError::RateLimited { retry_after_secs } => {
                let mut response = json_error(StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED);
                if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
                response
            }
            // Transport and contract failures (and anything unforeseen) map
            // to the same opaque 502.
            err => {
                error!(error = %err, "forecast resolution failed");
                json_error(StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE)
            }
        }
    }
}
