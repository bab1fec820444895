//! Application error type mapping to the relay's wire contract.
//!
//! Every failure answering `/chat` becomes `500 {"reply": "⚠️ Server Error:
//! ..."}` -- the client always receives well-formed JSON with a
//! human-readable `reply`, success or failure, and renders both through the
//! same path. There is deliberately no machine-readable error code; callers
//! that need to distinguish failures pattern-match on the warning prefix.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use relaychat_types::chat::ChatResponse;
use relaychat_types::error::UpstreamError;

/// Prefix on every error reply.
pub const SERVER_ERROR_PREFIX: &str = "⚠️ Server Error: ";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Upstream inference call failed.
    Upstream(UpstreamError),
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Upstream(err) = self;
        tracing::error!(error = %err, "chat relay failed");

        let body = ChatResponse {
            reply: format!("{SERVER_ERROR_PREFIX}{err}"),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upstream_error_maps_to_500_warning_reply() {
        let err = AppError::from(UpstreamError::Http("connection refused".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ChatResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.reply.starts_with(SERVER_ERROR_PREFIX));
        assert!(body.reply.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_status_error_keeps_upstream_detail() {
        let err = AppError::from(UpstreamError::Status {
            status: 503,
            body: "overloaded".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ChatResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.reply.contains("503"));
        assert!(body.reply.contains("overloaded"));
    }
}
