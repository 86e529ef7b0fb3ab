//! Application layer for interview-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, QuizProgressNotifier},
    question_bank::QuestionBank,
    report_writer::{QuizReport, ReportError, ReportWriter},
};
pub use use_cases::assess_performance::{
    AssessPerformanceError, AssessPerformanceInput, AssessPerformanceUseCase, Assessment,
};
pub use use_cases::generate_quiz::{
    GenerateQuizError, GenerateQuizInput, GenerateQuizUseCase, GeneratedQuiz,
};
