//! Answer evaluation pipeline.
//!
//! A transport or provider failure yields the fixed fallback evaluation.
//! A reply that arrives but does not follow the `Score:` / `Feedback:` format
//! is a hard `AppError::Parse` and is never masked.

use tracing::warn;

use crate::errors::AppError;
use crate::interview::fallback::FallbackStore;
use crate::interview::models::{AnswerEvaluationRequest, EvaluationResult};
use crate::interview::parser::parse_evaluation;
use crate::interview::prompts::evaluation_prompt;
use crate::llm_client::TextGenerator;

pub async fn evaluate_answer(
    llm: &dyn TextGenerator,
    fallback: &FallbackStore,
    request: &AnswerEvaluationRequest,
) -> Result<EvaluationResult, AppError> {
    let prompt = evaluation_prompt(request);

    let text = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(role = %request.role, "Error evaluating answer with Gemini: {e}");
            return Ok(fallback.evaluation());
        }
    };

    parse_evaluation(&text)
}
