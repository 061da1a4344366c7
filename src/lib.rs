/*!
 * # vistutor
 *
 * A Rust library for turning free-text learning concepts into explanations,
 * renderable 3D scene graphs, and multiple-choice quizzes using AI text
 * generation.
 *
 * ## Features
 *
 * - Two-stage scene generation: plain-language explanation, then a structured
 *   JSON scene graph decoded from the generated text
 * - Quiz generation with a tolerant parser for the fixed question format
 * - Re-explanation of incorrectly answered quiz questions
 * - Bounded retry with exponential backoff for transient backend failures
 * - Injectable generation backends, including a deterministic mock
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `prompts`: Instruction templates for every generation flow
 * - `providers`: Client implementations for generation backends:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::mock`: Deterministic mock generator for tests
 * - `retry`: Generic bounded-retry controller with exponential backoff
 * - `scene`: Scene graph model, structured-output extraction, and the
 *   two-stage pipeline orchestrator
 * - `quiz`: Quiz generation and quiz-text parsing
 * - `errors`: Custom error types for the pipeline
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod quiz;
pub mod retry;
pub mod scene;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ExtractError, PipelineError, ProviderError};
pub use providers::TextGenerator;
pub use providers::gemini::Gemini;
pub use providers::mock::MockGenerator;
pub use quiz::{QuizGenerator, QuizQuestion, ReExplanationRequest, parse_quiz_text};
pub use retry::{RetryPolicy, run_with_retry};
pub use scene::{SceneGraph, ScenePipeline, SceneResult};
