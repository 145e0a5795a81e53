use std::sync::Arc;

use chrono::{Local, NaiveDate};
use stratus_middleware::{TtlCache, retry};
use stratus_nws::{ForecastPeriod, NwsApi};
use stratus_types::{CacheConfig, Coordinate, RetryConfig, WeatherError, WeatherSummary};
use tracing::debug;

/// Two-stage forecast resolution with per-stage caching and retried
/// upstream calls.
///
/// Stage A maps a coordinate to its grid-cell forecast URL via `/points`;
/// stage B fetches the period list from that URL. The selected "today"
/// period is cached independently of the stage A cache, so a warm
/// coordinate short-circuits both upstream calls entirely.
///
/// Concurrent misses for the same key are not de-duplicated: two in-flight
/// requests may each trigger the upstream call pair. Accepted cost for a
/// single-process deployment.
pub struct ForecastResolver {
    api: Arc<dyn NwsApi>,
    retry_cfg: RetryConfig,
    points_cache: TtlCache<String, String>,
    today_cache: TtlCache<String, ForecastPeriod>,
}

impl ForecastResolver {
    /// Build a resolver over `api` with the given cache and retry budgets.
    #[must_use]
    pub fn new(api: Arc<dyn NwsApi>, cache_cfg: CacheConfig, retry_cfg: RetryConfig) -> Self {
        Self {
            api,
            retry_cfg,
            points_cache: TtlCache::new(cache_cfg.points_ttl),
            today_cache: TtlCache::new(cache_cfg.today_ttl),
        }
    }

    /// Stage A: resolve the forecast URL for `coordinate`.
    ///
    /// Retries cover the call itself; a successful response without a
    /// forecast reference is a contract violation and fails hard.
    async fn forecast_url(&self, coordinate: &Coordinate) -> Result<String, WeatherError> {
        let key = format!("points:{}", coordinate.rounded_key());
        if let Some(url) = self.points_cache.get(&key) {
            debug!(%key, "points cache hit");
            return Ok(url);
        }

        let points = retry(&self.retry_cfg, "nws/points", || {
            self.api.points(coordinate)
        })
        .await?;
        let url = points.properties.forecast.ok_or_else(|| {
            WeatherError::contract("forecast reference missing from points response")
        })?;

        self.points_cache.insert(key, url.clone());
        Ok(url)
    }

    /// Resolve today's forecast period for `coordinate`.
    ///
    /// # Errors
    /// Propagates transport failures unchanged once the retry budget is
    /// exhausted, and contract violations (missing forecast reference,
    /// empty period list) without retrying them.
    pub async fn today_period(
        &self,
        coordinate: &Coordinate,
    ) -> Result<ForecastPeriod, WeatherError> {
        let key = format!("today:{}", coordinate.rounded_key());
        if let Some(period) = self.today_cache.get(&key) {
            debug!(%key, "today cache hit");
            return Ok(period);
        }

        let url = self.forecast_url(coordinate).await?;
        let forecast = retry(&self.retry_cfg, "nws/forecast", || self.api.forecast(&url)).await?;
        let periods = forecast.properties.periods;
        if periods.is_empty() {
            return Err(WeatherError::contract("no forecast periods returned"));
        }

        let today = select_period(&periods, Local::now().date_naive());
        self.today_cache.insert(key, today.clone());
        Ok(today)
    }

    /// Resolve and summarize in one call.
    ///
    /// # Errors
    /// Same failure surface as [`today_period`](Self::today_period); the
    /// summary step itself cannot fail.
    pub async fn today_summary(
        &self,
        coordinate: &Coordinate,
    ) -> Result<WeatherSummary, WeatherError> {
        let period = self.today_period(coordinate).await?;
        Ok(crate::summary::build_summary(coordinate, &period))
    }
}

/// Pick the period whose start falls on `today`, else the first one.
///
/// Date comparison only; the period's own offset decides which calendar day
/// its start belongs to. Deterministic for a given list and date, and never
/// fails on a non-empty list.
///
/// # Panics
/// Panics if `periods` is empty; callers reject empty lists first.
#[must_use]
pub fn select_period(periods: &[ForecastPeriod], today: NaiveDate) -> ForecastPeriod {
    periods
        .iter()
        .find(|period| period.start_time.date_naive() == today)
        .unwrap_or(&periods[0])
        .clone()
}
