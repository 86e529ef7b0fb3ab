//! Presentation layer for interview-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz loop.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::runner::{Choice, QuizRunner, RunOutcome, RunnerError, parse_choice};
