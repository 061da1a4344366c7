/*!
 * Tests for the bounded-retry controller
 *
 * Backoff is deterministic by design (base * 2, base * 4, ...). Jitter would
 * be a reasonable future hardening once concurrent invocations can stampede a
 * shared backend, but these tests pin the current sequential behavior.
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use vistutor::errors::ProviderError;
use vistutor::retry::{RetryPolicy, is_transient, run_with_retry};

/// Short backoff base so the doubling schedule stays observable without
/// slowing the suite down: waits of 20ms then 40ms.
const TEST_BASE_DELAY: Duration = Duration::from_millis(10);

fn transient_error() -> ProviderError {
    ProviderError::ApiError {
        status_code: 503,
        message: "model overloaded".to_string(),
    }
}

fn fatal_error() -> ProviderError {
    ProviderError::ApiError {
        status_code: 400,
        message: "bad request".to_string(),
    }
}

fn retryable(error: &ProviderError) -> bool {
    is_transient(&error.to_string())
}

#[tokio::test]
async fn test_runWithRetry_transientTwiceThenSuccess_shouldInvokeThreeTimesWithBackoff() {
    let policy = RetryPolicy::new(3, TEST_BASE_DELAY);
    let calls = AtomicUsize::new(0);
    let started = Instant::now();

    let result = run_with_retry(
        policy,
        || {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call < 2 {
                    Err(transient_error())
                } else {
                    Ok("generated text".to_string())
                }
            }
        },
        retryable,
    )
    .await;

    assert_eq!(result.unwrap(), "generated text");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    // Two waits: base * 2 + base * 4.
    assert!(started.elapsed() >= TEST_BASE_DELAY * 6);
}

#[tokio::test]
async fn test_runWithRetry_nonRetryableError_shouldFailImmediatelyWithoutWaiting() {
    let policy = RetryPolicy::new(3, TEST_BASE_DELAY);
    let calls = AtomicUsize::new(0);
    let started = Instant::now();

    let result: Result<String, ProviderError> = run_with_retry(
        policy,
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(fatal_error()) }
        },
        retryable,
    )
    .await;

    assert!(matches!(
        result,
        Err(ProviderError::ApiError {
            status_code: 400,
            ..
        })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // No backoff wait happened before propagation.
    assert!(started.elapsed() < TEST_BASE_DELAY * 2);
}

#[tokio::test]
async fn test_runWithRetry_allAttemptsTransient_shouldPropagateLastError() {
    let policy = RetryPolicy::new(3, TEST_BASE_DELAY);
    let calls = AtomicUsize::new(0);

    let result: Result<String, ProviderError> = run_with_retry(
        policy,
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(transient_error()) }
        },
        retryable,
    )
    .await;

    assert!(matches!(
        result,
        Err(ProviderError::ApiError {
            status_code: 503,
            ..
        })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_runWithRetry_firstAttemptSucceeds_shouldNotRetry() {
    let policy = RetryPolicy::new(3, TEST_BASE_DELAY);
    let calls = AtomicUsize::new(0);

    let result: Result<u32, ProviderError> = tokio_test::block_on(run_with_retry(
        policy,
        || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(42) }
        },
        retryable,
    ));

    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
