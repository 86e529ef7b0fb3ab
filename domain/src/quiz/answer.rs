//! Answer records and scoring

use serde::{Deserialize, Serialize};

use super::question::QuestionRecord;
use super::resolution::{Resolution, resolve_correct_index};

/// The outcome of one question in a completed run (Value Object)
///
/// Serialized with the field names the assessment prompt expects. A question
/// that was skipped has no `chosenOption` (`null` in JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_text: String,
    pub chosen_option: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
    pub explanation: String,
}

impl AnswerRecord {
    /// Record an answered question from its resolution
    pub fn answered(question: &QuestionRecord, chosen: &str, resolution: &Resolution) -> Self {
        Self {
            question_text: question.prompt.clone(),
            chosen_option: Some(chosen.to_string()),
            correct_option: resolution.correct_option_text.clone(),
            is_correct: resolution.is_correct,
            explanation: question.explanation.clone(),
        }
    }

    /// Record a question the candidate did not answer
    pub fn unanswered(question: &QuestionRecord) -> Self {
        let (correct_index, _) = resolve_correct_index(question);
        Self {
            question_text: question.prompt.clone(),
            chosen_option: None,
            correct_option: question.options[correct_index].clone(),
            is_correct: false,
            explanation: question.explanation.clone(),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.chosen_option.is_some()
    }
}

/// Tally of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub wrong: usize,
    pub unanswered: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn from_answers(answers: &[AnswerRecord]) -> Self {
        answers.iter().fold(Self::default(), |mut score, answer| {
            score.total += 1;
            match (answer.is_answered(), answer.is_correct) {
                (false, _) => score.unanswered += 1,
                (true, true) => score.correct += 1,
                (true, false) => score.wrong += 1,
            }
            score
        })
    }

    /// Share of correct answers over all questions, 0-100
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 * 100.0 / self.total as f64
        }
    }
}
