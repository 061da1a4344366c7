/*!
 * Quiz and re-explanation flows.
 *
 * Both are single-stage backend calls. Quiz generation returns the raw quiz
 * text; parsing into typed questions is the caller's concern (see
 * [`crate::quiz::parser`]), which lets callers decide how to react to
 * partially usable output. Neither flow is retried — the generic retry
 * controller can be layered on later if these calls prove flaky.
 */

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::prompts;
use crate::providers::TextGenerator;

/// Inputs for a re-explanation after an incorrect quiz answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReExplanationRequest {
    /// The concept the quiz covered
    pub concept: String,

    /// The question the learner got wrong
    pub question_text: String,

    /// The answer the learner chose
    pub user_answer: String,

    /// The correct answer
    pub correct_answer: String,
}

/// Quiz and re-explanation generation over an injected backend.
pub struct QuizGenerator {
    /// Generation backend; injected so tests can substitute a deterministic stub
    generator: Arc<dyn TextGenerator>,
}

impl QuizGenerator {
    /// Create a quiz generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate raw quiz text for a concept.
    ///
    /// The text follows the `Q<number>.` block format the quiz prompt pins
    /// down; it is returned unparsed.
    pub async fn generate(&self, concept: &str) -> Result<String, PipelineError> {
        if concept.trim().is_empty() {
            return Err(PipelineError::MissingInput("concept"));
        }

        info!("Generating quiz");
        let prompt = prompts::quiz_prompt(concept);
        let quiz = self.generator.generate(&prompt).await?;
        info!("Quiz generated ({} chars)", quiz.len());
        Ok(quiz)
    }

    /// Generate a short remedial explanation for an incorrect answer.
    ///
    /// All four request fields are required and embedded verbatim in the
    /// prompt.
    pub async fn re_explain(
        &self,
        request: &ReExplanationRequest,
    ) -> Result<String, PipelineError> {
        if request.concept.trim().is_empty() {
            return Err(PipelineError::MissingInput("concept"));
        }
        if request.question_text.trim().is_empty() {
            return Err(PipelineError::MissingInput("questionText"));
        }
        if request.user_answer.trim().is_empty() {
            return Err(PipelineError::MissingInput("userAnswer"));
        }
        if request.correct_answer.trim().is_empty() {
            return Err(PipelineError::MissingInput("correctAnswer"));
        }

        info!("Generating re-explanation");
        let prompt = prompts::re_explanation_prompt(
            &request.concept,
            &request.question_text,
            &request.user_answer,
            &request.correct_answer,
        );
        let explanation = self.generator.generate(&prompt).await?;
        Ok(explanation)
    }
}
