use std::sync::Arc;

use crate::errors::AppError;
use crate::interview::fallback::FallbackStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no model credential was configured at startup.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub fallback: Arc<FallbackStore>,
}

impl AppState {
    pub fn new(llm: Option<Arc<dyn TextGenerator>>, fallback: FallbackStore) -> Self {
        Self {
            llm,
            fallback: Arc::new(fallback),
        }
    }

    /// The model client, or a configuration error if none was set up.
    pub fn llm(&self) -> Result<&dyn TextGenerator, AppError> {
        self.llm
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Gemini API key not configured.".to_string()))
    }
}
