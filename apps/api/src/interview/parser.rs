//! Parsing of free-text model replies into structured results.

use crate::errors::AppError;
use crate::interview::models::{EvaluationResult, Question};
use crate::interview::prompts::{FEEDBACK_LABEL, SCORE_LABEL};

/// One question per non-blank line, ids assigned 1.. in line order.
pub fn parse_questions(text: &str) -> Vec<Question> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .zip(1..)
        .map(|(line, id)| Question {
            id,
            text: line.to_string(),
        })
        .collect()
}

/// Finds the first `Score:` and first `Feedback:` line anywhere in the reply.
/// Prefix matching is exact and case-sensitive. The score must be finite but
/// is not range-checked.
pub fn parse_evaluation(text: &str) -> Result<EvaluationResult, AppError> {
    let score_line = find_labeled(text, SCORE_LABEL);
    let feedback_line = find_labeled(text, FEEDBACK_LABEL);

    let (Some(score_text), Some(feedback)) = (score_line, feedback_line) else {
        return Err(AppError::Parse(
            "Could not parse evaluation from Gemini API.".to_string(),
        ));
    };

    let score = score_text
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .ok_or_else(|| {
            AppError::Parse(format!(
                "Could not parse score '{score_text}' from Gemini API response."
            ))
        })?;

    Ok(EvaluationResult {
        score,
        feedback: feedback.to_string(),
    })
}

fn find_labeled<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    text.lines()
        .find_map(|line| line.strip_prefix(label))
        .map(str::trim)
}
