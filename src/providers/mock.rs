/*!
 * Mock generator implementations for testing.
 *
 * This module provides a mock generator that simulates different behaviors:
 * - `MockGenerator::always(text)` - Always succeeds with the given text
 * - `MockGenerator::scripted(responses)` - Plays back a fixed response queue
 * - `MockGenerator::failing(status, message)` - Always fails with an API error
 * - `MockGenerator::transient_then(failures, text)` - Fails with 503 first
 */

// Allow dead code - the mock generator is for library consumers and tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::TextGenerator;

/// Behavior mode for the mock generator
#[derive(Debug)]
enum MockBehavior {
    /// Always succeeds with a fixed response
    Always(String),
    /// Plays back a queue of prepared results, then fails
    Scripted(Mutex<VecDeque<Result<String, ProviderError>>>),
    /// Always fails with an API error
    Failing { status_code: u16, message: String },
    /// Fails with a 503 for the first N calls, then succeeds
    TransientThen { failures: usize, text: String },
}

/// Mock generator for exercising flows without a real backend
#[derive(Debug)]
pub struct MockGenerator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of generate calls received
    call_count: AtomicUsize,
    /// Prompts received, in call order
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always succeeds with the given text
    pub fn always(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Always(text.into()))
    }

    /// Create a mock that plays back the given results in order
    ///
    /// Calls past the end of the script fail with a request error, which
    /// keeps an over-calling flow visible in tests.
    pub fn scripted(responses: Vec<Result<String, ProviderError>>) -> Self {
        Self::with_behavior(MockBehavior::Scripted(Mutex::new(VecDeque::from(
            responses,
        ))))
    }

    /// Create a mock that always fails with an API error
    pub fn failing(status_code: u16, message: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Failing {
            status_code,
            message: message.into(),
        })
    }

    /// Create a mock that returns a 503 for the first `failures` calls
    pub fn transient_then(failures: usize, text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::TransientThen {
            failures,
            text: text.into(),
        })
    }

    /// Number of generate calls received so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// All prompts received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Always(text) => Ok(text.clone()),
            MockBehavior::Scripted(queue) => {
                queue.lock().unwrap().pop_front().unwrap_or_else(|| {
                    Err(ProviderError::RequestFailed(
                        "mock script exhausted".to_string(),
                    ))
                })
            }
            MockBehavior::Failing {
                status_code,
                message,
            } => Err(ProviderError::ApiError {
                status_code: *status_code,
                message: message.clone(),
            }),
            MockBehavior::TransientThen { failures, text } => {
                if call < *failures {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: "model overloaded".to_string(),
                    })
                } else {
                    Ok(text.clone())
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
