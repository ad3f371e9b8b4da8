//! Static answers served when the model cannot be reached.

use std::collections::HashMap;

use crate::interview::models::{EvaluationResult, Question};

pub const FALLBACK_SCORE: f64 = 0.75;
pub const FALLBACK_FEEDBACK: &str = "This is a mock evaluation. The answer seems plausible.";

const SOFTWARE_ENGINEER: &[&str] = &[
    "Explain the difference between a list and a tuple in Python.",
    "What is a REST API?",
    "Describe the concept of Object-Oriented Programming.",
];

const PRODUCT_MANAGER: &[&str] = &[
    "How do you prioritize features for a new product?",
    "What are some common KPIs for a SaaS product?",
];

/// Read-only table built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct FallbackStore {
    questions: HashMap<String, Vec<Question>>,
    evaluation: EvaluationResult,
}

impl FallbackStore {
    pub fn new(roles: &[(&str, &[&str])]) -> Self {
        let questions: HashMap<String, Vec<Question>> = roles
            .iter()
            .map(|(role, texts)| {
                let list: Vec<Question> = texts
                    .iter()
                    .zip(1..)
                    .map(|(text, id)| Question {
                        id,
                        text: text.to_string(),
                    })
                    .collect();
                (role.to_string(), list)
            })
            .collect();

        Self {
            questions,
            evaluation: EvaluationResult {
                score: FALLBACK_SCORE,
                feedback: FALLBACK_FEEDBACK.to_string(),
            },
        }
    }

    pub fn standard() -> Self {
        Self::new(&[
            ("software_engineer", SOFTWARE_ENGINEER),
            ("product_manager", PRODUCT_MANAGER),
        ])
    }

    /// First `limit` questions for `role`; `None` if the role is unknown.
    /// Returns fewer than `limit` when the list is shorter.
    pub fn questions_for(&self, role: &str, limit: u32) -> Option<Vec<Question>> {
        self.questions
            .get(role)
            .map(|list| list.iter().take(limit as usize).cloned().collect())
    }

    pub fn evaluation(&self) -> EvaluationResult {
        self.evaluation.clone()
    }
}
