use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/chat - relay a visitor message to the chat collaborator
pub async fn message(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::validation_error("Field 'message' is required"));
    }

    let reply = state.chat.reply(&payload.message).await.map_err(|e| {
        tracing::error!("chat provider error: {}", e);
        ApiError::internal_server_error("Chat service unavailable")
    })?;

    Ok(Json(ChatResponse { reply }))
}
