//! Question generation pipeline: prompt → model → per-line parse, with the
//! static role table as a fallback when the model call itself fails.

use tracing::warn;

use crate::errors::AppError;
use crate::interview::fallback::FallbackStore;
use crate::interview::models::{Question, QuestionRequest};
use crate::interview::parser::parse_questions;
use crate::interview::prompts::question_prompt;
use crate::llm_client::TextGenerator;

pub async fn fetch_questions(
    llm: &dyn TextGenerator,
    fallback: &FallbackStore,
    request: &QuestionRequest,
) -> Result<Vec<Question>, AppError> {
    match generate_questions(llm, request).await {
        Err(AppError::Upstream(cause)) => {
            warn!(
                role = %request.role,
                "Error fetching questions from Gemini: {cause}"
            );
            fallback
                .questions_for(&request.role, request.num_questions)
                .ok_or_else(|| {
                    AppError::Upstream(format!(
                        "Error fetching questions from Gemini API and no mock questions \
                         available for role: {}. Error: {cause}",
                        request.role
                    ))
                })
        }
        other => other,
    }
}

async fn generate_questions(
    llm: &dyn TextGenerator,
    request: &QuestionRequest,
) -> Result<Vec<Question>, AppError> {
    let prompt = question_prompt(&request.role, request.num_questions);
    let text = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let mut questions = parse_questions(&text);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "Could not generate questions for role: {}",
            request.role
        )));
    }
    questions.truncate(request.num_questions as usize);
    Ok(questions)
}
