use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stratus workspace.
///
/// Every failure carries one of four discriminants so the HTTP boundary can
/// switch on the tag instead of inspecting error shapes: input validation,
/// upstream transport, upstream contract, and capacity.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeatherError {
    /// Malformed or out-of-range request input. Reported synchronously at
    /// the boundary, never retried.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Network-level failure talking to the upstream provider (connect
    /// failure, timeout, non-2xx status). Subject to the retry budget.
    #[error("upstream transport failure: {0}")]
    Transport(String),

    /// Well-formed upstream response missing required data (no forecast
    /// reference, empty period list). A hard failure, not retried.
    #[error("upstream contract violation: {0}")]
    Contract(String),

    /// The request rate exceeds the configured per-client budget.
    #[error("rate limit exceeded: retry after {retry_after_secs}s")]
    RateLimited {
        /// Whole seconds until the client's window resets.
        retry_after_secs: u64,
    },
}

impl WeatherError {
    /// Helper: build a `Validation` error from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Helper: build a `Transport` error from a message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Helper: build a `Contract` error from a message.
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    /// Whether a fresh attempt could plausibly succeed.
    ///
    /// Only transport failures are transient; validation, contract, and
    /// capacity errors are deterministic for a given request.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
