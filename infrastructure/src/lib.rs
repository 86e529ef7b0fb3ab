//! Infrastructure layer for interview-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod question_bank;
pub mod report;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileQuizConfig,
};
pub use gemini::{error::GeminiError, gateway::GeminiGateway, session::GeminiSession};
pub use question_bank::{BankError, StaticQuestionBank};
pub use report::{JsonReportWriter, write_assessment_html};
