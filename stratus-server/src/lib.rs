//! stratus-server
//!
//! Axum front end wiring the forecast pipeline to the inbound HTTP
//! contract: query validation, per-client rate limiting, and the mapping
//! from tagged pipeline errors to status codes.
#![warn(missing_docs)]

mod api;
mod config;
mod error;

pub use api::{AppState, app_router};
pub use config::Config;
