//! Built-in question bank
//!
//! Hand-written questions for a few topics, used offline and when question
//! generation fails.

mod static_bank;

pub use static_bank::{BankError, StaticQuestionBank};
