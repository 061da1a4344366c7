/*!
 * Bounded retry with exponential backoff for generation calls.
 *
 * The controller is generic over the wrapped operation and the retryability
 * classifier, so the same backoff semantics apply to every flow that opts in.
 */

use std::future::Future;
use std::time::Duration;

use log::warn;

/// Marker that classifies a backend failure as transient.
///
/// The generation backend reports overload through its HTTP status, which
/// providers embed in the error display text.
pub const TRANSIENT_MARKER: &str = "503";

/// Whether an error description indicates a transient failure worth retrying.
pub fn is_transient(message: &str) -> bool {
    message.contains(TRANSIENT_MARKER)
}

/// Retry policy for a single wrapped operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,

    /// Base unit for the exponential backoff
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a retry policy with explicit attempt ceiling and backoff base.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Backoff before the attempt following `attempt` (counted from 1).
    ///
    /// Doubles per attempt: base * 2, base * 4, ... which at the default base
    /// gives 2s then 4s. Deterministic, no jitter.
    // TODO: add jitter once concurrent pipeline invocations share a backend
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * (1u32 << attempt.min(16))
    }
}

/// Run an asynchronous operation under the given retry policy.
///
/// The operation is invoked up to `policy.max_attempts` times. After a failed
/// attempt, if the error is classified retryable and attempts remain, the
/// controller sleeps for the backoff delay and retries; otherwise the error
/// propagates immediately. When every attempt fails the last error is
/// returned.
pub async fn run_with_retry<T, E, Op, Fut, Retryable>(
    policy: RetryPolicy,
    mut operation: Op,
    is_retryable: Retryable,
) -> Result<T, E>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    Retryable: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt < policy.max_attempts && is_retryable(&error) {
                    let delay = policy.backoff_delay(attempt);
                    warn!(
                        "Attempt {}/{} failed: {} - retrying in {:?}",
                        attempt, policy.max_attempts, error, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                } else {
                    return Err(error);
                }
            }
        }
    }
}
