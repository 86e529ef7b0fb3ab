//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assess_performance;
pub mod generate_quiz;
pub(crate) mod shared;
