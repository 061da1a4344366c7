/*!
 * Quiz text parser.
 *
 * The quiz prompt pins the generator to `Q<number>.` question blocks with
 * four `X)` options and an `Answer:` line. Generated output drifts, so the
 * parser tolerates it: fragments without enough lines are dropped silently,
 * and a missing answer line falls back to "A". Zero parsed questions is the
 * caller's signal to regenerate the quiz.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker separating question blocks in generated quiz text.
static QUESTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Q\d+\.").expect("question marker pattern is valid"));

/// Answer letter assumed when a block carries no parseable answer line.
pub const DEFAULT_ANSWER: &str = "A";

/// Minimum non-blank lines for a usable block: question text, four options,
/// and at least one more line carrying the answer.
const MIN_BLOCK_LINES: usize = 6;

/// The four answer options of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl AnswerOptions {
    /// Option text for a letter, if the letter is one of A-D.
    pub fn get(&self, letter: &str) -> Option<&str> {
        match letter {
            "A" => Some(&self.a),
            "B" => Some(&self.b),
            "C" => Some(&self.c),
            "D" => Some(&self.d),
            _ => None,
        }
    }
}

/// One parsed multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based position of the source fragment; independent of the
    /// `Q<number>` labels in the text
    pub id: usize,

    /// Question text
    pub question: String,

    /// The four options, keyed A-D
    pub options: AnswerOptions,

    /// Correct answer letter, uppercased
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// Parse generated quiz text into an ordered list of questions.
///
/// Splits on the `Q<number>.` marker, discards blank fragments, and keeps
/// every fragment with at least six non-blank lines. Underweight fragments
/// are dropped without error; callers receiving fewer questions than
/// requested treat the result as degraded, and an empty result as failed.
pub fn parse_quiz_text(raw: &str) -> Vec<QuizQuestion> {
    QUESTION_MARKER
        .split(raw)
        .filter(|fragment| !fragment.trim().is_empty())
        .enumerate()
        .filter_map(|(index, fragment)| parse_block(index + 1, fragment))
        .collect()
}

/// Parse one question fragment, or drop it when underweight.
fn parse_block(id: usize, fragment: &str) -> Option<QuizQuestion> {
    let lines: Vec<&str> = fragment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < MIN_BLOCK_LINES {
        return None;
    }

    let options = AnswerOptions {
        a: strip_option_marker(lines[1], "A"),
        b: strip_option_marker(lines[2], "B"),
        c: strip_option_marker(lines[3], "C"),
        d: strip_option_marker(lines[4], "D"),
    };

    // The answer line can sit anywhere after the options; the value after the
    // first colon wins. An answer line with an empty value stays empty — the
    // default applies only when the line is absent entirely.
    let correct_answer = lines
        .iter()
        .find(|line| line.to_lowercase().starts_with("answer:"))
        .and_then(|line| line.split(':').nth(1))
        .map(|answer| answer.trim().to_uppercase())
        .unwrap_or_else(|| DEFAULT_ANSWER.to_string());

    Some(QuizQuestion {
        id,
        question: lines[0].to_string(),
        options,
        correct_answer,
    })
}

/// Strip a leading "X) " option marker; lines without the marker pass through.
fn strip_option_marker(line: &str, letter: &str) -> String {
    line.strip_prefix(letter)
        .and_then(|rest| rest.strip_prefix(')'))
        .map(|rest| rest.trim_start().to_string())
        .unwrap_or_else(|| line.to_string())
}
