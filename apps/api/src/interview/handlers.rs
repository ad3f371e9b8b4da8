//! Axum route handlers for the interview API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::interview::evaluation::evaluate_answer;
use crate::interview::models::{
    AnswerEvaluationRequest, EvaluationResult, Question, QuestionRequest,
};
use crate::interview::questions::fetch_questions;
use crate::state::AppState;

/// POST /fetch-questions
///
/// Generates `num_questions` questions for a role. Falls back to the static
/// table for known roles when the model call fails.
pub async fn handle_fetch_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<Vec<Question>>, AppError> {
    let llm = state.llm()?;
    let questions = fetch_questions(llm, &state.fallback, &request).await?;
    Ok(Json(questions))
}

/// POST /evaluate-answer
///
/// Scores a candidate answer. Falls back to a fixed evaluation when the model
/// call fails; an unparseable reply is a 500.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerEvaluationRequest>,
) -> Result<Json<EvaluationResult>, AppError> {
    let llm = state.llm()?;
    let result = evaluate_answer(llm, &state.fallback, &request).await?;
    Ok(Json(result))
}
