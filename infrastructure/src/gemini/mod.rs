//! Gemini adapter
//!
//! Implements the [`LlmGateway`](quiz_application::LlmGateway) port over the
//! Gemini `generateContent` REST endpoint.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
