use std::fmt::Display;
use std::future::Future;

use stratus_types::RetryConfig;
use tracing::warn;

/// Run `op`, retrying on any failure with linear backoff.
///
/// Attempt `n` (1-based) that fails waits `base_delay * n` before the next
/// try; once `retries` re-attempts are exhausted the last error propagates
/// unchanged, with no wrapping or suppression. The wrapper is agnostic to
/// the failure type and retries on anything `op` reports.
///
/// Every re-attempt is logged at `warn` with the attempt count and the
/// causing error; this is the only place retries are observable.
///
/// # Errors
/// Returns the final attempt's error once the budget is spent.
pub async fn retry<T, E, F, Fut>(cfg: &RetryConfig, label: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt <= cfg.retries => {
                warn!(label, attempt, error = %err, "retrying after failure");
                tokio::time::sleep(cfg.base_delay * attempt).await;
            }
            Err(err) => return Err(err),
        }
    }
}
