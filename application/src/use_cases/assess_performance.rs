//! Assess Performance use case
//!
//! Sends the answers of a finished run to the model and parses the analysis
//! it returns.

use std::sync::Arc;

use quiz_domain::{
    AnswerRecord, AssessmentDocument, CandidateName, DomainError, Model, PromptTemplate, Topic,
};
use thiserror::Error;
use tracing::{debug, info};

use super::shared::send_with_timeout;
use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, QuizProgressNotifier};

#[derive(Error, Debug)]
pub enum AssessPerformanceError {
    #[error("No answers to assess")]
    NoAnswers,

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("The assessment contained no usable text")]
    EmptyAssessment,

    #[error("Could not build the assessment prompt: {0}")]
    Prompt(#[from] DomainError),
}

/// Input for the AssessPerformance use case
#[derive(Debug, Clone)]
pub struct AssessPerformanceInput {
    pub name: CandidateName,
    pub topic: Topic,
    pub model: Model,
    pub answers: Vec<AnswerRecord>,
}

/// A model-written analysis of a run
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Response text as received
    pub raw: String,
    pub document: AssessmentDocument,
}

impl Assessment {
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}

/// Use case for the end-of-run performance analysis
pub struct AssessPerformanceUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: BehaviorConfig,
}

impl<G: LlmGateway + 'static> AssessPerformanceUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            config: BehaviorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: AssessPerformanceInput,
    ) -> Result<Assessment, AssessPerformanceError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AssessPerformanceInput,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<Assessment, AssessPerformanceError> {
        if input.answers.is_empty() {
            return Err(AssessPerformanceError::NoAnswers);
        }

        let answered = input.answers.iter().filter(|a| a.is_answered()).count();
        progress.on_assessment_start(answered);

        let result = self.request_assessment(&input).await;
        progress.on_assessment_complete(result.is_ok());
        result
    }

    async fn request_assessment(
        &self,
        input: &AssessPerformanceInput,
    ) -> Result<Assessment, AssessPerformanceError> {
        info!(
            "Requesting assessment of {} answers from {}",
            input.answers.len(),
            input.model
        );

        let prompt =
            PromptTemplate::assessment(input.name.as_str(), &input.topic, &input.answers)?;
        let session = self.gateway.create_session(&input.model).await?;
        let raw = send_with_timeout(session.as_ref(), &prompt, self.config.timeout).await?;

        let document = AssessmentDocument::parse(&raw);
        debug!("Assessment parsed into {} blocks", document.blocks.len());
        if document.is_empty() {
            return Err(AssessPerformanceError::EmptyAssessment);
        }

        Ok(Assessment { raw, document })
    }
}
