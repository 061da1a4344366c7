/*!
 * Error types for the vistutor generation pipeline.
 *
 * This module contains custom error types for different parts of the pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with generation backends
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    ///
    /// The status code is part of the display text so retry classification
    /// can inspect it (a 503 marks the failure as transient).
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while extracting a scene graph from generated text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The generated text contains no JSON object at all
    #[error("no structured output found in generated text")]
    NoStructuredOutput,

    /// A JSON object was located but is not parseable
    #[error("generated text is not valid JSON: {0}")]
    MalformedJson(String),

    /// The JSON parsed but does not match the scene graph shape
    ///
    /// Distinct from [`ExtractError::MalformedJson`]: this one means the
    /// generator produced valid JSON with the wrong structure.
    #[error("scene graph violates expected shape: {0}")]
    SchemaViolation(String),
}

/// Errors produced by the generation flows (scene, quiz, re-explanation)
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A required input was missing or blank; rejected before any backend call
    #[error("missing or empty input: {0}")]
    MissingInput(&'static str),

    /// Error from the generation backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error extracting structured output from generated text
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a generation backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a generation flow
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
