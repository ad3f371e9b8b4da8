pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/fetch-questions", post(handlers::handle_fetch_questions))
        .route("/evaluate-answer", post(handlers::handle_evaluate_answer))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::interview::fallback::{FallbackStore, FALLBACK_FEEDBACK};
    use crate::llm_client::TextGenerator;
    use crate::test_support::StubGenerator;

    fn app_with(llm: Option<StubGenerator>) -> Router {
        let llm = llm.map(|g| Arc::new(g) as Arc<dyn TextGenerator>);
        build_router(AppState::new(llm, FallbackStore::standard()))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn evaluation_body() -> Value {
        json!({
            "question": "What is a REST API?",
            "answer": "An architectural style built on HTTP.",
            "role": "software_engineer"
        })
    }

    // ── GET /health ─────────────────────────────────────────────────

    #[tokio::test]
    async fn health_reports_missing_model() {
        let resp = app_with(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model_configured"], false);
    }

    // ── POST /fetch-questions ───────────────────────────────────────

    #[tokio::test]
    async fn fetch_without_credential_is_500() {
        let (status, body) = post_json(
            app_with(None),
            "/fetch-questions",
            json!({"role": "software_engineer", "num_questions": 2}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Gemini API key not configured.");
    }

    #[tokio::test]
    async fn fetch_falls_back_for_known_role() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::failing())),
            "/fetch-questions",
            json!({"role": "software_engineer", "num_questions": 2}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "text": "Explain the difference between a list and a tuple in Python."},
                {"id": 2, "text": "What is a REST API?"}
            ])
        );
    }

    #[tokio::test]
    async fn fetch_unknown_role_without_model_is_500() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::failing())),
            "/fetch-questions",
            json!({"role": "astronaut", "num_questions": 3}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("astronaut"));
    }

    #[tokio::test]
    async fn fetch_empty_reply_is_404() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::replying("\n\n"))),
            "/fetch-questions",
            json!({"role": "astronaut"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("astronaut"));
    }

    #[tokio::test]
    async fn fetch_defaults_to_five_questions() {
        let reply = "q1\nq2\nq3\nq4\nq5\nq6\nq7";
        let (status, body) = post_json(
            app_with(Some(StubGenerator::replying(reply))),
            "/fetch-questions",
            json!({"role": "designer"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_body() {
        let (status, _) = post_json(
            app_with(Some(StubGenerator::replying("q1"))),
            "/fetch-questions",
            json!({"num_questions": 2}),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn fetch_zero_questions_is_empty_list() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::replying("Q1?\nQ2?"))),
            "/fetch-questions",
            json!({"role": "software_engineer", "num_questions": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    // ── POST /evaluate-answer ───────────────────────────────────────

    #[tokio::test]
    async fn evaluate_without_credential_is_500() {
        let (status, _) = post_json(app_with(None), "/evaluate-answer", evaluation_body()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn evaluate_parses_model_reply() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::replying("Score: 0.9\nFeedback: Good answer."))),
            "/evaluate-answer",
            evaluation_body(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"score": 0.9, "feedback": "Good answer."}));
    }

    #[tokio::test]
    async fn evaluate_missing_feedback_is_500() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::replying("Score: 0.9"))),
            "/evaluate-answer",
            evaluation_body(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("Could not parse evaluation"));
    }

    #[tokio::test]
    async fn evaluate_non_numeric_score_is_500() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::replying("Score: notanumber\nFeedback: ok"))),
            "/evaluate-answer",
            evaluation_body(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("notanumber"));
    }

    #[tokio::test]
    async fn evaluate_non_finite_score_is_500() {
        for reply in ["Score: NaN\nFeedback: ok", "Score: inf\nFeedback: ok"] {
            let (status, body) = post_json(
                app_with(Some(StubGenerator::replying(reply))),
                "/evaluate-answer",
                evaluation_body(),
            )
            .await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body["detail"].as_str().unwrap().contains("Could not parse score"));
        }
    }

    #[tokio::test]
    async fn evaluate_transport_failure_returns_fallback() {
        let (status, body) = post_json(
            app_with(Some(StubGenerator::failing())),
            "/evaluate-answer",
            evaluation_body(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"score": 0.75, "feedback": FALLBACK_FEEDBACK}));
    }
}
