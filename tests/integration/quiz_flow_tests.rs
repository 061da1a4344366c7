/*!
 * Tests for the quiz and re-explanation flows over a scripted backend
 */

use std::sync::Arc;

use vistutor::errors::{PipelineError, ProviderError};
use vistutor::providers::mock::MockGenerator;
use vistutor::quiz::{QuizGenerator, ReExplanationRequest, parse_quiz_text};

use crate::common;

fn request() -> ReExplanationRequest {
    ReExplanationRequest {
        concept: "the water cycle".to_string(),
        question_text: "What do water droplets form in the sky?".to_string(),
        user_answer: "B".to_string(),
        correct_answer: "C".to_string(),
    }
}

#[tokio::test]
async fn test_quizGenerator_generate_shouldReturnRawTextUnchanged() {
    let quiz_text = common::three_question_quiz_text();
    let generator = Arc::new(MockGenerator::always(quiz_text.clone()));
    let quiz_generator = QuizGenerator::new(generator.clone());

    let raw = quiz_generator.generate("the water cycle").await.unwrap();

    // The flow does not parse; parsing stays with the caller.
    assert_eq!(raw, quiz_text);
    assert_eq!(generator.call_count(), 1);

    let questions = parse_quiz_text(&raw);
    assert_eq!(questions.len(), 3);
}

#[tokio::test]
async fn test_quizGenerator_generate_shouldEmbedConceptInPrompt() {
    let generator = Arc::new(MockGenerator::always("Q1. ..."));
    let quiz_generator = QuizGenerator::new(generator.clone());

    quiz_generator.generate("photosynthesis").await.unwrap();

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"photosynthesis\""));
}

#[tokio::test]
async fn test_quizGenerator_generate_blankConcept_shouldRejectBeforeAnyCall() {
    let generator = Arc::new(MockGenerator::always("unused"));
    let quiz_generator = QuizGenerator::new(generator.clone());

    let result = quiz_generator.generate("").await;

    assert!(matches!(result, Err(PipelineError::MissingInput("concept"))));
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_quizGenerator_generate_backendError_shouldPropagateUnchanged() {
    let generator = Arc::new(MockGenerator::failing(500, "internal error"));
    let quiz_generator = QuizGenerator::new(generator.clone());

    let result = quiz_generator.generate("the water cycle").await;

    assert!(matches!(
        result,
        Err(PipelineError::Provider(ProviderError::ApiError {
            status_code: 500,
            ..
        }))
    ));
    // The quiz flow performs no retries.
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn test_quizGenerator_reExplain_shouldEmbedAllFieldsVerbatim() {
    let generator = Arc::new(MockGenerator::always(
        "That's okay! Droplets gather into clouds.",
    ));
    let quiz_generator = QuizGenerator::new(generator.clone());

    let explanation = quiz_generator.re_explain(&request()).await.unwrap();

    assert_eq!(explanation, "That's okay! Droplets gather into clouds.");
    let prompts = generator.prompts();
    assert!(prompts[0].contains("\"the water cycle\""));
    assert!(prompts[0].contains("What do water droplets form in the sky?"));
    assert!(prompts[0].contains("Student chose: B"));
    assert!(prompts[0].contains("Correct answer: C"));
}

#[tokio::test]
async fn test_quizGenerator_reExplain_missingField_shouldNameTheField() {
    let generator = Arc::new(MockGenerator::always("unused"));
    let quiz_generator = QuizGenerator::new(generator.clone());

    let mut incomplete = request();
    incomplete.user_answer = String::new();

    let result = quiz_generator.re_explain(&incomplete).await;

    assert!(matches!(
        result,
        Err(PipelineError::MissingInput("userAnswer"))
    ));
    assert_eq!(generator.call_count(), 0);
}
