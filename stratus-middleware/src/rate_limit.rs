use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use stratus_types::{RateLimitConfig, WeatherError};

struct RateBucket {
    count: u64,
    reset_at: Instant,
}

/// Fixed-window per-client request counter.
///
/// A client's bucket is replaced wholesale once its window has elapsed, so a
/// burst of up to twice the configured maximum can straddle a window
/// boundary. That is an accepted tradeoff of fixed windows, not a bug.
///
/// State lives in a single in-process map; nothing is shared across service
/// instances.
pub struct RateLimiter {
    cfg: RateLimitConfig,
    buckets: Mutex<HashMap<String, RateBucket>>,
}

impl RateLimiter {
    /// Create a limiter enforcing `cfg`.
    #[must_use]
    pub fn new(cfg: RateLimitConfig) -> Self {
        Self {
            cfg,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Account one request for `client_id` and decide whether to admit it.
    ///
    /// The count is incremented before the limit check, so the bucket always
    /// reflects the request that caused a rejection.
    ///
    /// # Errors
    /// Returns [`WeatherError::RateLimited`] with a positive retry hint when
    /// the client is over budget for the current window.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn admit(&self, client_id: &str) -> Result<(), WeatherError> {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().expect("rate limiter mutex poisoned");
        let bucket = buckets
            .entry(client_id.to_string())
            .and_modify(|bucket| {
                if now > bucket.reset_at {
                    bucket.count = 0;
                    bucket.reset_at = now + self.cfg.window;
                }
            })
            .or_insert_with(|| RateBucket {
                count: 0,
                reset_at: now + self.cfg.window,
            });

        bucket.count += 1;
        if bucket.count > self.cfg.max_requests {
            let remaining_ms =
                u64::try_from(bucket.reset_at.saturating_duration_since(now).as_millis())
                    .unwrap_or(u64::MAX);
            return Err(WeatherError::RateLimited {
                retry_after_secs: remaining_ms.div_ceil(1000).max(1),
            });
        }
        Ok(())
    }
}
