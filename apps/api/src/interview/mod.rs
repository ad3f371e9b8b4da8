// Interview question generation and answer evaluation.
// All model calls go through llm_client::TextGenerator; nothing here talks HTTP to the provider.

pub mod evaluation;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod questions;
