use std::net::SocketAddr;
use std::time::Duration;

use stratus_nws::DEFAULT_BASE_URL;
use stratus_types::{CacheConfig, RateLimitConfig, RetryConfig};

/// Environment-derived runtime configuration.
///
/// Recognized variables (all optional; unset or unparsable values fall back
/// to the defaults):
///
/// - `STRATUS_LISTEN_ADDR` — socket address to bind (default `0.0.0.0:3000`)
/// - `STRATUS_USER_AGENT` — contact-bearing outbound identifier
/// - `STRATUS_NWS_BASE_URL` — upstream base URL (stubbed in tests)
/// - `STRATUS_POINTS_TTL_MS` / `STRATUS_TODAY_TTL_MS` — cache TTLs
/// - `STRATUS_RETRIES` / `STRATUS_RETRY_DELAY_MS` — retry budget
/// - `STRATUS_RATE_WINDOW_MS` / `STRATUS_RATE_MAX` — rate-limit window
///
/// Log verbosity follows the usual `RUST_LOG` filter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Outbound `User-Agent`; NWS asks for a reachable contact in it.
    pub user_agent: String,
    /// Upstream base URL.
    pub nws_base_url: String,
    /// Resolver cache TTLs.
    pub cache: CacheConfig,
    /// Upstream retry budget.
    pub retry: RetryConfig,
    /// Per-client request budget.
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Read configuration from the process environment (and a `.env` file
    /// when present).
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let cache = CacheConfig::default();
        let retry = RetryConfig::default();
        let rate = RateLimitConfig::default();

        Self {
            listen_addr: env_parsed("STRATUS_LISTEN_ADDR")
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000))),
            user_agent: env_string("STRATUS_USER_AGENT")
                .unwrap_or_else(|| "stratus-weather (contact@stratus.ws)".to_string()),
            nws_base_url: env_string("STRATUS_NWS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache: CacheConfig {
                points_ttl: env_millis("STRATUS_POINTS_TTL_MS").unwrap_or(cache.points_ttl),
                today_ttl: env_millis("STRATUS_TODAY_TTL_MS").unwrap_or(cache.today_ttl),
            },
            retry: RetryConfig {
                retries: env_parsed("STRATUS_RETRIES").unwrap_or(retry.retries),
                base_delay: env_millis("STRATUS_RETRY_DELAY_MS").unwrap_or(retry.base_delay),
            },
            rate_limit: RateLimitConfig {
                window: env_millis("STRATUS_RATE_WINDOW_MS").unwrap_or(rate.window),
                max_requests: env_parsed("STRATUS_RATE_MAX").unwrap_or(rate.max_requests),
            },
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env_string(name).and_then(|value| value.parse().ok())
}

fn env_millis(name: &str) -> Option<Duration> {
    env_parsed(name).map(Duration::from_millis)
}
