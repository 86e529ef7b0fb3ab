//! Port for exporting a finished quiz run.
//!
//! The report is the machine-readable record of a run: who took it, what it
//! was about, where the questions came from, and every answer.

use chrono::{DateTime, Utc};
use quiz_domain::{AnswerRecord, CandidateName, QuestionSource, QuizScore, Topic};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(String),
}

/// Summary of a completed quiz run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub name: CandidateName,
    pub topic: Topic,
    pub question_source: QuestionSource,
    pub score: QuizScore,
    pub percentage: f64,
    pub answers: Vec<AnswerRecord>,
    pub completed_at: DateTime<Utc>,
}

impl QuizReport {
    /// Build a report stamped with the current time
    pub fn new(
        name: CandidateName,
        topic: Topic,
        question_source: QuestionSource,
        answers: Vec<AnswerRecord>,
    ) -> Self {
        let score = QuizScore::from_answers(&answers);
        Self {
            name,
            topic,
            question_source,
            percentage: score.percentage(),
            score,
            answers,
            completed_at: Utc::now(),
        }
    }
}

/// Destination for quiz reports
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &QuizReport) -> Result<(), ReportError>;
}
