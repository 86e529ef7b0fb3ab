//! Domain layer for interview-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question parsing
//!
//! Generated question text is loosely formatted. [`parse_questions`] scans it
//! for `Question:` / `A)`..`D)` / `Answer:` / `Explanation:` markers and keeps
//! only the blocks that form a complete four-option question.
//!
//! ## Answer resolution
//!
//! The correct answer of a question is either an option letter or the option
//! text itself. [`resolve_answer`] decides which, and grades a choice against it.
//!
//! ## Quiz session
//!
//! [`QuizSession`] walks a candidate through a batch of questions and collects
//! [`AnswerRecord`]s for the performance assessment.

pub mod assessment;
pub mod core;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use assessment::{AssessmentBlock, AssessmentDocument, trim_assessment};
pub use core::{candidate::CandidateName, error::DomainError, model::Model};
pub use prompt::{DEFAULT_QUESTION_COUNT, PromptTemplate};
pub use quiz::{
    answer::{AnswerRecord, QuizScore},
    parsing::{parse_optional_questions, parse_questions},
    question::{CorrectAnswer, OptionLetter, QuestionRecord},
    resolution::{Resolution, ResolutionKind, resolve_answer, resolve_correct_index},
    session::{QuizSession, QuizState},
    source::QuestionSource,
    topic::Topic,
};
