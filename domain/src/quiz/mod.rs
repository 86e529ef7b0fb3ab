//! Quiz subdomain
//!
//! - [`question`]: question records and the correct-answer encoding
//! - [`parsing`]: generated text → question records
//! - [`resolution`]: chosen option → verdict
//! - [`answer`]: per-question outcomes and the score
//! - [`session`]: the quiz state machine
//! - [`source`]: where a question batch came from
//! - [`topic`]: what a quiz is about

pub mod answer;
pub mod parsing;
pub mod question;
pub mod resolution;
pub mod session;
pub mod source;
pub mod topic;
