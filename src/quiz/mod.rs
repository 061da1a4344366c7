/*!
 * Quiz generation and parsing.
 *
 * This module is split into two submodules:
 *
 * - `generator`: Quiz and re-explanation flows over the generation backend
 * - `parser`: Conversion of semi-structured quiz text into typed question
 *   records
 */

pub use self::generator::{QuizGenerator, ReExplanationRequest};
pub use self::parser::{AnswerOptions, QuizQuestion, parse_quiz_text};

pub mod generator;
pub mod parser;
