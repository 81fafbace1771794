//! Quiz extraction
//!
//! Lesson authors embed quizzes in ordinary paragraph and quote text using a
//! light line convention: a question line starts with a 3-letter category
//! code (`MCQ`, `TOF`, `ORD`) followed by a dash, the correct answer line
//! ends with `===`, and every other line up to the next question is a choice.
//! This module groups a flattened line sequence into quiz records according
//! to that convention.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::models::{Quiz, QuizCategory};

/// Literal suffix marking a line as the quiz's correct answer.
pub const ANSWER_MARKER: &str = "===";

static CATEGORY_CODES: Lazy<HashMap<&'static str, QuizCategory>> = Lazy::new(|| {
    let mut codes = HashMap::new();
    for category in [
        QuizCategory::MultipleChoice,
        QuizCategory::TrueFalse,
        QuizCategory::Ordering,
    ] {
        codes.insert(category.code(), category);
    }
    codes
});

/// Group a flattened line sequence into quiz records.
///
/// Lines before the first question marker are ignored. A quiz is emitted when
/// the next question marker is reached, or at end of input; incomplete
/// quizzes (no choices, empty answer) are emitted as-is.
pub fn extract_quizzes(lines: &[String]) -> Vec<Quiz> {
    let mut quizzes = Vec::new();
    let mut current: Option<Quiz> = None;

    for line in lines {
        if let Some((category, rest)) = split_question_marker(line) {
            if let Some(finished) = current.take() {
                quizzes.push(finished);
            }
            current = Some(Quiz {
                category,
                question: rest.strip_prefix('-').unwrap_or(rest).trim().to_string(),
                choices: Vec::new(),
                answer: String::new(),
            });
        } else if let Some(quiz) = current.as_mut() {
            if let Some(answer) = line.strip_suffix(ANSWER_MARKER) {
                // A later answer line overwrites an earlier one.
                quiz.answer = answer.to_string();
            } else {
                quiz.choices.push(line.clone());
            }
        }
    }

    if let Some(finished) = current {
        quizzes.push(finished);
    }

    quizzes
}

/// Membership test on the first 3 bytes of the line. Lines shorter than a
/// code, or whose first 3 bytes do not fall on a character boundary, are not
/// question markers.
fn split_question_marker(line: &str) -> Option<(QuizCategory, &str)> {
    let prefix = line.get(..QuizCategory::CODE_LEN)?;
    let category = *CATEGORY_CODES.get(prefix)?;
    Some((category, &line[QuizCategory::CODE_LEN..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn question_marker_round_trip() {
        let quizzes = extract_quizzes(&lines(&["MCQ-What is 2+2?"]));
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].category, QuizCategory::MultipleChoice);
        assert_eq!(quizzes[0].question, "What is 2+2?");
    }

    #[test]
    fn answer_marker_sets_answer() {
        let quizzes = extract_quizzes(&lines(&["MCQ-What is 2+2?", "4==="]));
        assert_eq!(quizzes[0].answer, "4");
        assert!(quizzes[0].choices.is_empty());
    }

    #[test]
    fn groups_consecutive_lines_into_quizzes() {
        let quizzes = extract_quizzes(&lines(&[
            "MCQ-Q1", "A", "B", "4===", "MCQ-Q2", "C", "D",
        ]));
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].question, "Q1");
        assert_eq!(quizzes[0].choices, vec!["A", "B"]);
        assert_eq!(quizzes[0].answer, "4");
        assert_eq!(quizzes[1].question, "Q2");
        assert_eq!(quizzes[1].choices, vec!["C", "D"]);
        assert_eq!(quizzes[1].answer, "");
    }

    #[test]
    fn one_quiz_per_question_marker() {
        let input = lines(&["TOF-صح أم خطأ", "صحيح===", "ORD-رتب الأعداد", "١", "٢"]);
        let marker_count = input
            .iter()
            .filter(|l| l.starts_with("MCQ") || l.starts_with("TOF") || l.starts_with("ORD"))
            .count();
        assert_eq!(extract_quizzes(&input).len(), marker_count);
    }

    #[test]
    fn no_markers_yields_no_quizzes() {
        let quizzes = extract_quizzes(&lines(&["plain", "text", "only"]));
        assert!(quizzes.is_empty());
    }

    #[test]
    fn empty_input_yields_no_quizzes() {
        assert!(extract_quizzes(&[]).is_empty());
    }

    #[test]
    fn lines_before_first_marker_are_ignored() {
        let quizzes = extract_quizzes(&lines(&["intro text", "MCQ-Q", "A"]));
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].choices, vec!["A"]);
    }

    #[test]
    fn short_lines_are_not_markers() {
        let quizzes = extract_quizzes(&lines(&["MC", "م", "", "MCQ-Q"]));
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].question, "Q");
    }

    #[test]
    fn multibyte_prefix_is_not_a_marker() {
        // First 3 bytes land inside the first character; must not panic.
        let quizzes = extract_quizzes(&lines(&["سؤال بلا ترميز"]));
        assert!(quizzes.is_empty());
    }

    #[test]
    fn last_answer_line_wins() {
        let quizzes = extract_quizzes(&lines(&["MCQ-Q", "3===", "4==="]));
        assert_eq!(quizzes[0].answer, "4");
        assert!(quizzes[0].choices.is_empty());
    }

    #[test]
    fn document_ending_mid_quiz_still_emits() {
        let quizzes = extract_quizzes(&lines(&["ORD-رتب", "أول"]));
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].category, QuizCategory::Ordering);
        assert_eq!(quizzes[0].choices, vec!["أول"]);
        assert_eq!(quizzes[0].answer, "");
    }

    #[test]
    fn only_the_separating_dash_is_stripped() {
        let quizzes = extract_quizzes(&lines(&["MCQ--x"]));
        assert_eq!(quizzes[0].question, "-x");
    }

    #[test]
    fn marker_with_no_remainder_yields_empty_question() {
        let quizzes = extract_quizzes(&lines(&["MCQ-"]));
        assert_eq!(quizzes[0].question, "");
    }

    #[test]
    fn extraction_is_stateless() {
        let input = lines(&["MCQ-Q1", "A", "4===", "TOF-Q2", "صحيح==="]);
        assert_eq!(extract_quizzes(&input), extract_quizzes(&input));
    }
}
