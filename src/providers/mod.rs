/*!
 * Provider implementations for text generation.
 *
 * This module contains client implementations for generation backends:
 * - Gemini: Google Gemini REST API
 * - Mock: deterministic in-memory generator for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for text-generation backends
///
/// The trait is object safe so a backend can be constructed once and injected
/// wherever a flow needs one, including deterministic stubs in tests. A
/// generator takes one prompt and returns the backend's raw response text; it
/// performs no retries and surfaces backend errors unchanged.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Generate raw text from a single prompt
    ///
    /// # Arguments
    /// * `prompt` - The full instruction text to send to the backend
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw response text (may be
    ///   empty, may contain markdown or code fences) or the backend's error
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the backend
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod gemini;
pub mod mock;
