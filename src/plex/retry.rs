//! Retry and timeout helpers for Plex requests
//!
//! Backoff grows exponentially up to a cap. Whole sessions are bounded by
//! running the blocking work on tokio's blocking pool under a timeout.

use crate::errors::AppResult;
use std::time::Duration;
use tokio::task::JoinError;
use tokio::time::error::Elapsed;
use tokio::time::timeout;

/// Calculate next backoff duration using exponential backoff with a maximum cap
///
/// `new_backoff = min(current_backoff * multiplier, max_backoff)`
///
/// # Example
/// ```
/// use std::time::Duration;
/// use plex_tools::plex::calculate_next_backoff;
///
/// let next = calculate_next_backoff(Duration::from_millis(250), 2.0, 10);
/// assert_eq!(next, Duration::from_millis(500));
/// ```
pub fn calculate_next_backoff(
    current_backoff: Duration,
    multiplier: f64,
    max_backoff_seconds: u64,
) -> Duration {
    Duration::from_millis((current_backoff.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}

/// Whether a response status is worth another attempt
///
/// Server-side failures and rate limiting are transient; other client errors
/// (bad token, unknown key) will not improve on retry.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Execute a blocking operation on the blocking pool with a timeout
///
/// # Returns
/// - Outer Result: timeout (Err = elapsed)
/// - Middle Result: task join (Err = panic/cancellation)
/// - Inner AppResult<T>: the operation's own result
pub async fn execute_with_timeout<T, F>(
    timeout_seconds: u64,
    operation: F,
) -> Result<Result<AppResult<T>, JoinError>, Elapsed>
where
    T: Send + 'static,
    F: FnOnce() -> AppResult<T> + Send + 'static,
{
    timeout(
        Duration::from_secs(timeout_seconds),
        tokio::task::spawn_blocking(operation),
    )
    .await
}
