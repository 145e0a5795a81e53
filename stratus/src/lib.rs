//! stratus
//!
//! The forecast-resolution pipeline: turns a validated coordinate into a
//! cached, retried, validated forecast summary by brokering two calls to the
//! National Weather Service.
//!
//! The pipeline is deliberately process-local. Caches and counters live in
//! owned state objects constructed from configuration and shared by handle,
//! so tests get isolation from fresh instances; nothing coordinates across
//! service instances.
#![warn(missing_docs)]

mod resolver;
mod summary;

pub use resolver::{ForecastResolver, select_period};
pub use summary::build_summary;
