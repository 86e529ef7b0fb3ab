//! Performance assessment domain
//!
//! The assessment text comes back from the model as loosely formatted
//! markdown. [`markup`] turns it into a small block structure that can be
//! rendered as HTML or to a terminal.

pub mod markup;

pub use markup::{AssessmentBlock, AssessmentDocument, trim_assessment};
