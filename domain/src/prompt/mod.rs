//! Prompt domain
//!
//! Templates for the two requests a quiz run makes: question generation and
//! the final performance assessment.

mod template;

pub use template::{DEFAULT_QUESTION_COUNT, PromptTemplate};
