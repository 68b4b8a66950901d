//! The API description endpoint and the terminal not-found responder.

use crate::errors::ErrorBody;
use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Description of the available endpoints, embedded at compile time and
/// parsed once. A malformed document fails on first use, not per request.
static ENDPOINTS: LazyLock<serde_json::Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../endpoints.json"))
        .expect("embedded endpoints.json is valid JSON")
});

#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointsEnvelope {
    pub endpoints: serde_json::Value,
}

// GET /api
pub async fn get_api() -> Json<EndpointsEnvelope> {
    Json(EndpointsEnvelope {
        endpoints: ENDPOINTS.clone(),
    })
}

/// Fallback for any unmatched path, regardless of method.
pub async fn path_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            msg: "path not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn get_api_describes_every_route(pool: PgPool) {
        let server = create_test_app(pool);
        let response = server.get("/api").await;
        response.assert_status_ok();

        let body: EndpointsEnvelope = response.json();
        let endpoints = body.endpoints.as_object().expect("endpoints should be an object");
        assert!(endpoints.contains_key("GET /api/topics"));
        assert!(endpoints.contains_key("GET /api/articles"));
        assert!(endpoints.contains_key("DELETE /api/comments/:comment_id"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unmatched_paths_return_404_for_any_method(pool: PgPool) {
        let server = create_test_app(pool);

        let response = server.get("/api/apple").await;
        response.assert_status_not_found();
        let body: ErrorBody = response.json();
        assert_eq!(body.msg, "path not found");

        let response = server.post("/definitely/not/a/route").await;
        response.assert_status_not_found();
        let body: ErrorBody = response.json();
        assert_eq!(body.msg, "path not found");
    }
}
