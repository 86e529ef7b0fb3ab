//! Generate Quiz use case
//!
//! Requests a question batch from the model, parses it, and falls back to the
//! static question bank once if anything goes wrong.

use std::sync::Arc;

use quiz_domain::{
    Model, PromptTemplate, QuestionRecord, QuestionSource, ResolutionKind, Topic,
    parse_questions, resolve_correct_index,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::shared::send_with_timeout;
use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use crate::ports::question_bank::QuestionBank;

/// Errors that can occur while preparing a question batch
#[derive(Error, Debug)]
pub enum GenerateQuizError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("The response contained no complete questions")]
    NoQuestions,

    #[error("The question bank has no questions for {0}")]
    EmptyBank(Topic),
}

/// Input for the GenerateQuiz use case
#[derive(Debug, Clone)]
pub struct GenerateQuizInput {
    pub topic: Topic,
    pub model: Model,
    /// Skip the model and use the question bank directly
    pub offline: bool,
}

impl GenerateQuizInput {
    pub fn new(topic: Topic, model: Model) -> Self {
        Self {
            topic,
            model,
            offline: false,
        }
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

/// A question batch ready to be played
#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub topic: Topic,
    pub questions: Vec<QuestionRecord>,
    pub source: QuestionSource,
}

/// Use case for preparing the questions of a run
pub struct GenerateQuizUseCase<G: LlmGateway + 'static, B: QuestionBank + 'static> {
    gateway: Arc<G>,
    bank: Arc<B>,
    config: BehaviorConfig,
}

impl<G: LlmGateway + 'static, B: QuestionBank + 'static> GenerateQuizUseCase<G, B> {
    pub fn new(gateway: Arc<G>, bank: Arc<B>) -> Self {
        Self {
            gateway,
            bank,
            config: BehaviorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: GenerateQuizInput) -> Result<GeneratedQuiz, GenerateQuizError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateQuizInput,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<GeneratedQuiz, GenerateQuizError> {
        let count = self.config.question_count;
        progress.on_generation_start(&input.topic, count);

        let quiz = if input.offline {
            info!("Offline mode: using question bank for {}", input.topic);
            self.from_bank(&input.topic, QuestionSource::Offline)?
        } else {
            match self.request_questions(&input).await {
                Ok(questions) => GeneratedQuiz {
                    topic: input.topic.clone(),
                    questions,
                    source: QuestionSource::Generated,
                },
                Err(e) if self.config.fallback => {
                    warn!("Question generation failed, using question bank: {}", e);
                    self.from_bank(&input.topic, QuestionSource::fallback(e.to_string()))?
                }
                Err(e) => return Err(e),
            }
        };

        warn_on_unresolvable_answers(&quiz.questions);
        progress.on_generation_complete(&quiz.source, quiz.questions.len());
        Ok(quiz)
    }

    async fn request_questions(
        &self,
        input: &GenerateQuizInput,
    ) -> Result<Vec<QuestionRecord>, GenerateQuizError> {
        let count = self.config.question_count;
        info!(
            "Requesting {} questions on {} from {}",
            count, input.topic, input.model
        );

        let session = self.gateway.create_session(&input.model).await?;
        let prompt = PromptTemplate::question_generation(&input.topic, count);
        let response = send_with_timeout(session.as_ref(), &prompt, self.config.timeout).await?;

        let mut questions = parse_questions(&response);
        debug!(
            "Parsed {} questions from {} chars",
            questions.len(),
            response.len()
        );
        if questions.is_empty() {
            return Err(GenerateQuizError::NoQuestions);
        }
        questions.truncate(count);
        Ok(questions)
    }

    fn from_bank(
        &self,
        topic: &Topic,
        source: QuestionSource,
    ) -> Result<GeneratedQuiz, GenerateQuizError> {
        let mut questions = self.bank.questions_for(topic);
        if questions.is_empty() {
            return Err(GenerateQuizError::EmptyBank(topic.clone()));
        }
        questions.truncate(self.config.question_count);
        Ok(GeneratedQuiz {
            topic: topic.clone(),
            questions,
            source,
        })
    }
}

/// The resolver falls back to the first option when a correct answer matches
/// nothing; make that visible in the logs.
fn warn_on_unresolvable_answers(questions: &[QuestionRecord]) {
    for (i, question) in questions.iter().enumerate() {
        let (_, kind) = resolve_correct_index(question);
        if kind == ResolutionKind::Fallback {
            warn!(
                "Question {}: correct answer {:?} matches no option, defaulting to A",
                i + 1,
                question.correct_answer.to_raw()
            );
        }
    }
}
