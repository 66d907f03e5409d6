use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::cause::{Cause, CauseView, CreateCause, UpdateCause};
use crate::state::AppState;

/// GET /api/causes - all causes, newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CauseView>>, ApiError> {
    let causes = state.causes().select_any().await?;
    Ok(Json(causes.into_iter().map(CauseView::from).collect()))
}

/// GET /api/causes/:id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CauseView>, ApiError> {
    state
        .causes()
        .select_one(id)
        .await?
        .map(|cause| Json(CauseView::from(cause)))
        .ok_or_else(|| ApiError::not_found("Cause not found"))
}

/// POST /api/causes - raised amount defaults to zero
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateCause>,
) -> Result<(StatusCode, Json<CauseView>), ApiError> {
    validate_create(&payload)?;

    let cause = Cause::new(payload);
    state.causes().insert(cause.id, &cause).await?;
    Ok((StatusCode::CREATED, Json(CauseView::from(cause))))
}

/// PUT /api/causes/:id - merge-update; the raised amount may only grow
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCause>,
) -> Result<Json<CauseView>, ApiError> {
    let repo = state.causes();
    let mut cause = repo
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Cause not found"))?;

    if let Some(goal) = payload.goal_amount {
        if goal <= 0.0 {
            return Err(ApiError::validation_error("goalAmount must be greater than zero"));
        }
    }
    if let Some(raised) = payload.raised_amount {
        if raised < cause.raised_amount {
            return Err(ApiError::validation_error("raisedAmount cannot decrease"));
        }
    }

    cause.apply_update(payload);
    repo.update(id, &cause).await?;
    Ok(Json(CauseView::from(cause)))
}

/// DELETE /api/causes/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !state.causes().delete(id).await? {
        return Err(ApiError::not_found("Cause not found"));
    }
    Ok(Json(json!({ "message": "Cause removed" })))
}

fn validate_create(payload: &CreateCause) -> Result<(), ApiError> {
    let required = [
        ("title", &payload.title),
        ("description", &payload.description),
        ("content", &payload.content),
        ("image", &payload.image),
        ("category", &payload.category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ApiError::validation_error(format!("Field '{}' is required", field)));
        }
    }
    if payload.goal_amount <= 0.0 {
        return Err(ApiError::validation_error("goalAmount must be greater than zero"));
    }
    if payload.raised_amount.is_some_and(|r| r < 0.0) {
        return Err(ApiError::validation_error("raisedAmount cannot be negative"));
    }
    Ok(())
}
