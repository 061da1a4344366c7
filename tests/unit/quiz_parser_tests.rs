/*!
 * Tests for the quiz text parser
 *
 * Fragments without enough lines are silently dropped, and a missing answer
 * line defaults to "A"; downstream behavior depends on both, so these tests
 * pin them.
 */

use vistutor::quiz::parse_quiz_text;

use crate::common;

#[test]
fn test_parseQuizText_threeWellFormedBlocks_shouldProduceThreeQuestions() {
    let questions = parse_quiz_text(&common::three_question_quiz_text());

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[1].id, 2);
    assert_eq!(questions[2].id, 3);
    assert_eq!(questions[0].question, "What makes water rise from the ocean?");
    assert_eq!(questions[0].options.b, "Heat from the sun");
    assert_eq!(questions[1].correct_answer, "C");
    assert_eq!(questions[2].correct_answer, "A");
}

#[test]
fn test_parseQuizText_mixedCaseAnswerLine_shouldUppercaseLetter() {
    let raw = "Q1. Which way does rain fall?\n\
               A) Up\n\
               B) Down\n\
               C) Sideways\n\
               D) It floats\n\
               ANSWER: c\n";

    let questions = parse_quiz_text(raw);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_answer, "C");
}

#[test]
fn test_parseQuizText_missingAnswerLine_shouldDefaultToA() {
    // Six non-blank lines, but none starts with "answer:".
    let raw = "Q1. What is condensation?\n\
               A) Vapor turning to liquid\n\
               B) Liquid turning to vapor\n\
               C) Ice melting\n\
               D) Snow falling\n\
               The correct choice is the first one.\n";

    let questions = parse_quiz_text(raw);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_answer, "A");
}

#[test]
fn test_parseQuizText_shortBlock_shouldBeSilentlyDropped() {
    // Question plus only three options: under the six-line minimum.
    let raw = "Q1. What is evaporation?\n\
               A) Water rising as vapor\n\
               B) Rain\n\
               C) Snow\n";

    let questions = parse_quiz_text(raw);

    assert!(questions.is_empty());
}

#[test]
fn test_parseQuizText_droppedMiddleBlock_shouldKeepFragmentPositionIds() {
    let raw = "Q1. First question?\n\
               A) a\nB) b\nC) c\nD) d\n\
               Answer: A\n\
               Q2. Too short?\n\
               A) a\nB) b\n\
               Q3. Third question?\n\
               A) a\nB) b\nC) c\nD) d\n\
               Answer: D\n";

    let questions = parse_quiz_text(raw);

    // The malformed middle fragment still consumed position 2.
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[1].id, 3);
    assert_eq!(questions[1].correct_answer, "D");
}

#[test]
fn test_parseQuizText_emptyInput_shouldProduceNoQuestions() {
    assert!(parse_quiz_text("").is_empty());
    assert!(parse_quiz_text("Sorry, I cannot make a quiz for that.").is_empty());
}

#[test]
fn test_parseQuizText_optionMarkers_shouldBeStripped() {
    let questions = parse_quiz_text(&common::three_question_quiz_text());

    assert_eq!(questions[0].options.a, "Wind");
    assert_eq!(questions[0].options.d, "Waves");
    assert_eq!(questions[2].options.get("A"), Some("Rain falls"));
}
