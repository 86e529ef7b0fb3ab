//! Answer resolution
//!
//! Maps a chosen option to a verdict, whichever way the record encodes its
//! correct answer. Pure and stateless: the same inputs always give the same
//! [`Resolution`].

use serde::{Deserialize, Serialize};

use super::question::{CorrectAnswer, QuestionRecord};

/// How the correct option was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    /// The record named a slot letter
    Letter,
    /// The record repeated the option text
    Text,
    /// Neither encoding matched an option; the first option was assumed
    Fallback,
}

/// Outcome of resolving one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub is_correct: bool,
    /// Text of the option considered correct, for display after a wrong answer
    pub correct_option_text: String,
    pub correct_index: usize,
    pub kind: ResolutionKind,
}

impl Resolution {
    /// True when the record's answer could not be matched and option A was assumed
    pub fn is_fallback(&self) -> bool {
        self.kind == ResolutionKind::Fallback
    }
}

/// Find the index of the correct option.
///
/// A letter maps to its slot. Text matches the first option equal to it
/// after trimming and case folding. When neither works, index 0 is assumed.
pub fn resolve_correct_index(question: &QuestionRecord) -> (usize, ResolutionKind) {
    match &question.correct_answer {
        CorrectAnswer::Letter(letter) => (letter.index(), ResolutionKind::Letter),
        CorrectAnswer::Text(text) => question
            .options
            .iter()
            .position(|option| loosely_equal(option, text))
            .map_or((0, ResolutionKind::Fallback), |index| {
                (index, ResolutionKind::Text)
            }),
    }
}

/// Resolve `chosen` (an option string as rendered) against `question`.
///
/// # Examples
///
/// ```
/// use quiz_domain::quiz::question::QuestionRecord;
/// use quiz_domain::quiz::resolution::resolve_answer;
///
/// let options = ["4", "5", "6", "7"].map(String::from);
/// let by_letter = QuestionRecord::new("2+3?", options.clone(), "B");
/// let by_text = QuestionRecord::new("2+3?", options, "5");
///
/// assert!(resolve_answer(&by_letter, "5").is_correct);
/// assert!(!resolve_answer(&by_letter, "6").is_correct);
/// assert!(resolve_answer(&by_text, "  5  ").is_correct);
/// ```
pub fn resolve_answer(question: &QuestionRecord, chosen: &str) -> Resolution {
    let (correct_index, kind) = resolve_correct_index(question);
    let correct_option_text = question.options[correct_index].clone();

    Resolution {
        is_correct: loosely_equal(chosen, &correct_option_text),
        correct_option_text,
        correct_index,
        kind,
    }
}

/// Equality after trimming and case folding
fn loosely_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::OptionLetter;

    fn question(answer: &str) -> QuestionRecord {
        QuestionRecord::new("What is 2+3?", ["4", "5", "6", "7"].map(String::from), answer)
    }

    #[test]
    fn test_letter_encoding() {
        let q = question("B");
        let hit = resolve_answer(&q, "5");
        assert!(hit.is_correct);
        assert_eq!(hit.correct_option_text, "5");
        assert_eq!(hit.correct_index, 1);
        assert_eq!(hit.kind, ResolutionKind::Letter);

        let miss = resolve_answer(&q, "6");
        assert!(!miss.is_correct);
        assert_eq!(miss.correct_option_text, "5");
    }

    #[test]
    fn test_lowercase_letter_encoding() {
        let q = question("d");
        assert_eq!(q.correct_answer, CorrectAnswer::Letter(OptionLetter::D));
        assert!(resolve_answer(&q, "7").is_correct);
    }

    #[test]
    fn test_text_encoding_matches_letter_encoding() {
        let by_letter = question("B");
        let by_text = question("5");
        for chosen in ["4", "5", "6", "7"] {
            assert_eq!(
                resolve_answer(&by_letter, chosen).is_correct,
                resolve_answer(&by_text, chosen).is_correct,
                "disagreement on {chosen}"
            );
        }
        assert_eq!(resolve_answer(&by_text, "5").kind, ResolutionKind::Text);
    }

    #[test]
    fn test_text_encoding_ignores_case_and_whitespace() {
        let q = QuestionRecord::new(
            "Which keyword?",
            ["var", "let", "Const", "static"].map(String::from),
            "  const ",
        );
        let resolution = resolve_answer(&q, "CONST  ");
        assert!(resolution.is_correct);
        assert_eq!(resolution.correct_option_text, "Const");
    }

    #[test]
    fn test_chosen_value_is_trimmed() {
        assert!(resolve_answer(&question("5"), "  5  ").is_correct);
        assert!(resolve_answer(&question("B"), "  5  ").is_correct);
    }

    #[test]
    fn test_letter_as_chosen_value_is_not_a_slot() {
        // The chosen value is always option text, never a letter
        assert!(!resolve_answer(&question("B"), " B ").is_correct);
    }

    #[test]
    fn test_unresolvable_answer_falls_back_to_first_option() {
        let q = question("eight");
        let resolution = resolve_answer(&q, "4");
        assert!(resolution.is_correct);
        assert!(resolution.is_fallback());
        assert_eq!(resolution.correct_option_text, "4");
        assert_eq!(resolution.correct_index, 0);
    }

    #[test]
    fn test_first_matching_option_wins() {
        let q = QuestionRecord::new("Dup?", ["x", "y", "Y", "z"].map(String::from), "y");
        assert_eq!(resolve_answer(&q, "y").correct_index, 1);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let q = question("C");
        let first = resolve_answer(&q, "6");
        let second = resolve_answer(&q, "6");
        assert_eq!(first, second);
    }
}
