//! The relay endpoint.
//!
//! POST /chat
//!
//! Forwards the user message to the configured upstream backend and returns
//! `{"reply": ...}`. Stateless: no session, no history, no retry. Failures
//! map through [`AppError`](crate::http::error::AppError) into the same
//! `{"reply": ...}` shape with a 500 status.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use relaychat_types::chat::{ChatRequest, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat -- forward one message upstream, relay the reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::now_v7();
    tracing::info!(%request_id, chars = body.message.len(), "incoming chat message");

    let reply = state.relay.relay(&body.message).await?;

    tracing::debug!(%request_id, chars = reply.len(), "relaying reply");
    Ok(Json(ChatResponse { reply }))
}
