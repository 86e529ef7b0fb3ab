//! Progress notification port
//!
//! Defines the interface for reporting progress of the two network-bound
//! steps of a quiz run.

use quiz_domain::{QuestionSource, Topic};

/// Callback for progress updates during question generation and assessment
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait QuizProgressNotifier: Send + Sync {
    /// Called before questions are requested
    fn on_generation_start(&self, topic: &Topic, count: usize);

    /// Called once a batch is ready, wherever it came from
    fn on_generation_complete(&self, source: &QuestionSource, count: usize);

    /// Called before the assessment is requested
    fn on_assessment_start(&self, answered: usize);

    /// Called when the assessment request finishes
    fn on_assessment_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {
    fn on_generation_start(&self, _topic: &Topic, _count: usize) {}
    fn on_generation_complete(&self, _source: &QuestionSource, _count: usize) {}
    fn on_assessment_start(&self, _answered: usize) {}
    fn on_assessment_complete(&self, _success: bool) {}
}
