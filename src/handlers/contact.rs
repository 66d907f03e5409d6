use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::contact::{ContactMessage, ContactRequest};
use crate::state::AppState;

/// POST /api/contact - store the submission, then hand it to the mail
/// collaborator. A delivery failure is logged but does not fail the
/// request; the message is already persisted.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    for (field, value) in [
        ("name", &payload.name),
        ("email", &payload.email),
        ("message", &payload.message),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::validation_error(format!("Field '{}' is required", field)));
        }
    }
    if !payload.email.contains('@') {
        return Err(ApiError::validation_error("A valid email address is required"));
    }

    let message = ContactMessage::new(payload);
    state.contacts().insert(message.id, &message).await?;

    if let Err(e) = state.mailer.deliver(&message).await {
        tracing::error!(contact_id = %message.id, "mail hand-off failed: {}", e);
    }

    Ok((StatusCode::CREATED, Json(message)))
}
