//! stratus-middleware
//!
//! Reusable infrastructure around the forecast pipeline: a lazily-expiring
//! TTL cache, a retry-with-linear-backoff combinator, and a fixed-window
//! per-client rate limiter. All three are process-local; nothing here
//! coordinates across service instances.
#![warn(missing_docs)]

mod cache;
mod rate_limit;
mod retry;

pub use cache::TtlCache;
pub use rate_limit::RateLimiter;
pub use retry::retry;
