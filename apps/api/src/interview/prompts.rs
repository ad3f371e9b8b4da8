// Prompt builders for the interview endpoints.

use crate::interview::models::AnswerEvaluationRequest;

pub const SCORE_LABEL: &str = "Score:";
pub const FEEDBACK_LABEL: &str = "Feedback:";

pub fn question_prompt(role: &str, num_questions: u32) -> String {
    format!(
        "Generate {num_questions} interview questions for a {role} role. \
         Provide only the questions, each on a new line."
    )
}

pub fn evaluation_prompt(request: &AnswerEvaluationRequest) -> String {
    format!(
        "Evaluate the following answer for the question:\n\
         Question: \"{question}\"\n\
         Answer: \"{answer}\"\n\
         Role (for context, if applicable): \"{role}\"\n\
         \n\
         Provide a score from 0.0 to 1.0 (e.g., 0.75) and brief feedback.\n\
         Format your response as exactly two lines:\n\
         {SCORE_LABEL} [score]\n\
         {FEEDBACK_LABEL} [feedback]\n",
        question = request.question,
        answer = request.answer,
        role = request.role,
    )
}
