//! Domain error types

use crate::quiz::session::QuizState;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quiz has no questions")]
    NoQuestions,

    #[error("Cannot {action} while quiz is {state}")]
    InvalidTransition {
        action: &'static str,
        state: QuizState,
    },

    #[error("Candidate name cannot be empty")]
    EmptyCandidateName,

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Failed to serialize answers: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Check if this error was caused by driving the session out of order
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}
