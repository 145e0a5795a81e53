//! Configuration primitives shared between the resolver and the server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// TTLs for the two resolver caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a resolved forecast URL stays valid for a coordinate.
    pub points_ttl: Duration,
    /// How long a selected "today" period stays valid for a coordinate.
    pub today_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            points_ttl: Duration::from_secs(5 * 60),
            today_ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Retry budget for a fallible upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Number of re-attempts after the initial call.
    pub retries: u32,
    /// Base backoff delay; attempt `n` waits `base_delay * n` before the
    /// next try.
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            base_delay: Duration::from_millis(300),
        }
    }
}

/// Fixed-window per-client request budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window length; counters reset wholesale at window boundaries.
    pub window: Duration,
    /// Maximum admitted requests per client per window.
    pub max_requests: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(60),
            max_requests: 60,
        }
    }
}
