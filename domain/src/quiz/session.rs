//! Quiz session state machine
//!
//! ```text
//! NotStarted ──start──▶ Showing(0) ──submit/skip──▶ Feedback(0) ──advance──▶ Showing(1) … ──▶ Completed
//! ```
//!
//! The session owns the question batch and the answers collected so far. The
//! answer resolver runs exactly once per `Showing → Feedback` transition.

use super::answer::{AnswerRecord, QuizScore};
use super::question::QuestionRecord;
use super::resolution::{Resolution, resolve_answer, resolve_correct_index};
use crate::core::error::DomainError;

/// Where a session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// Question `i` is on screen, waiting for a choice
    Showing(usize),
    /// Question `i` was answered (or skipped); its verdict is on screen
    Feedback(usize),
    Completed,
}

impl std::fmt::Display for QuizState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizState::NotStarted => write!(f, "not started"),
            QuizState::Showing(i) => write!(f, "showing question {}", i + 1),
            QuizState::Feedback(i) => write!(f, "showing feedback for question {}", i + 1),
            QuizState::Completed => write!(f, "completed"),
        }
    }
}

/// One pass through a batch of questions
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    answers: Vec<AnswerRecord>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
            state: QuizState::NotStarted,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answers recorded so far, in question order
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn score(&self) -> QuizScore {
        QuizScore::from_answers(&self.answers)
    }

    pub fn is_completed(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// Index of the question on screen, if any
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Showing(i) | QuizState::Feedback(i) => Some(i),
            QuizState::NotStarted | QuizState::Completed => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// `NotStarted → Showing(0)`
    pub fn start(&mut self) -> Result<&QuestionRecord, DomainError> {
        if self.state != QuizState::NotStarted {
            return Err(self.invalid("start"));
        }
        if self.questions.is_empty() {
            return Err(DomainError::NoQuestions);
        }
        self.state = QuizState::Showing(0);
        Ok(&self.questions[0])
    }

    /// `Showing(i) → Feedback(i)`, recording the choice
    pub fn submit(&mut self, chosen: &str) -> Result<Resolution, DomainError> {
        let QuizState::Showing(i) = self.state else {
            return Err(self.invalid("submit an answer"));
        };
        let question = &self.questions[i];
        let resolution = resolve_answer(question, chosen);
        self.answers
            .push(AnswerRecord::answered(question, chosen, &resolution));
        self.state = QuizState::Feedback(i);
        Ok(resolution)
    }

    /// `Showing(i) → Feedback(i)` without a choice.
    ///
    /// The returned resolution carries the correct option so it can still be
    /// shown; `is_correct` is always false.
    pub fn skip(&mut self) -> Result<Resolution, DomainError> {
        let QuizState::Showing(i) = self.state else {
            return Err(self.invalid("skip a question"));
        };
        let question = &self.questions[i];
        let (correct_index, kind) = resolve_correct_index(question);
        self.answers.push(AnswerRecord::unanswered(question));
        self.state = QuizState::Feedback(i);
        Ok(Resolution {
            is_correct: false,
            correct_option_text: question.options[correct_index].clone(),
            correct_index,
            kind,
        })
    }

    /// `Feedback(i) → Showing(i + 1)`, or `Completed` after the last question
    pub fn advance(&mut self) -> Result<QuizState, DomainError> {
        let QuizState::Feedback(i) = self.state else {
            return Err(self.invalid("advance"));
        };
        self.state = if i + 1 < self.questions.len() {
            QuizState::Showing(i + 1)
        } else {
            QuizState::Completed
        };
        Ok(self.state)
    }

    /// End the run now. Every question without an answer is recorded as
    /// unanswered so the answer list always covers the whole batch.
    pub fn finish_early(&mut self) -> Result<(), DomainError> {
        match self.state {
            QuizState::Showing(_) | QuizState::Feedback(_) => {}
            QuizState::NotStarted | QuizState::Completed => {
                return Err(self.invalid("finish"));
            }
        }
        let remaining = self.questions[self.answers.len()..]
            .iter()
            .map(AnswerRecord::unanswered)
            .collect::<Vec<_>>();
        self.answers.extend(remaining);
        self.state = QuizState::Completed;
        Ok(())
    }

    /// Consume the session, handing over the answers for assessment
    pub fn into_answers(self) -> Vec<AnswerRecord> {
        self.answers
    }

    fn invalid(&self, action: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            action,
            state: self.state,
        }
    }
}
