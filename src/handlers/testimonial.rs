use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Testimonial>>, ApiError> {
    Ok(Json(state.testimonials().select_any().await?))
}

/// GET /api/testimonials/:id - used by the admin editor
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Testimonial>, ApiError> {
    state
        .testimonials()
        .select_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Testimonial not found"))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTestimonial>,
) -> Result<(StatusCode, Json<Testimonial>), ApiError> {
    validate_rating(payload.rating)?;
    for (field, value) in [("name", &payload.name), ("content", &payload.content)] {
        if value.trim().is_empty() {
            return Err(ApiError::validation_error(format!("Field '{}' is required", field)));
        }
    }

    let testimonial = Testimonial::new(payload);
    state.testimonials().insert(testimonial.id, &testimonial).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/testimonials/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTestimonial>,
) -> Result<Json<Testimonial>, ApiError> {
    if let Some(rating) = payload.rating {
        validate_rating(rating)?;
    }

    let repo = state.testimonials();
    let mut testimonial = repo
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial not found"))?;

    testimonial.apply_update(payload);
    repo.update(id, &testimonial).await?;
    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !state.testimonials().delete(id).await? {
        return Err(ApiError::not_found("Testimonial not found"));
    }
    Ok(Json(json!({ "message": "Testimonial removed" })))
}

fn validate_rating(rating: i32) -> Result<(), ApiError> {
    if !(1..=5).contains(&rating) {
        return Err(ApiError::validation_error("Rating must be between 1 and 5"));
    }
    Ok(())
}
