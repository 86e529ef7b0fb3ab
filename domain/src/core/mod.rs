//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models that can generate questions and assessments
//! - [`candidate::CandidateName`]: the validated name of the person taking a quiz
//! - [`error::DomainError`]: domain-level errors

pub mod candidate;
pub mod error;
pub mod model;
