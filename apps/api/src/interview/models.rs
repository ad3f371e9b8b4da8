//! Request and response bodies for the interview endpoints.

use serde::{Deserialize, Serialize};

fn default_num_questions() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    pub role: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

/// A single interview question. `id` is the 1-based position in the returned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerEvaluationRequest {
    pub question: String,
    pub answer: String,
    /// Context only; no role-specific scoring rules exist.
    pub role: String,
}

/// Score as reported by the model. Not clamped to [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub feedback: String,
}
