use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::models::blog::{Blog, CreateBlog, UpdateBlog};
use crate::state::AppState;

/// GET /api/blogs - all blogs, newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    Ok(Json(state.blogs().select_any().await?))
}

/// GET /api/blogs/:slug_or_id - by slug for the public site, or by id
/// (any valid UUID) for the admin editor
pub async fn get_one(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
) -> Result<Json<Blog>, ApiError> {
    let repo = state.blogs();

    let blog = match Uuid::parse_str(&slug_or_id) {
        Ok(id) => repo.select_one(id).await?,
        Err(_) => repo.select_by_field("slug", &slug_or_id).await?,
    };

    blog.map(Json).ok_or_else(|| ApiError::not_found("Blog not found"))
}

/// POST /api/blogs - create; slug must be unique
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<CreateBlog>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    validate_create(&payload)?;

    let repo = state.blogs();
    if repo.select_by_field("slug", &payload.slug).await?.is_some() {
        return Err(ApiError::conflict("Blog with this slug already exists"));
    }

    let blog = Blog::new(payload, admin.username);
    repo.insert(blog.id, &blog).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// PUT /api/blogs/:id - merge-update; a changed slug is re-checked for
/// uniqueness so edits cannot introduce duplicates
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlog>,
) -> Result<Json<Blog>, ApiError> {
    let repo = state.blogs();
    let mut blog = repo
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Blog not found"))?;

    if let Some(new_slug) = payload.slug.as_deref() {
        if new_slug.is_empty() {
            return Err(ApiError::validation_error("Slug cannot be empty"));
        }
        if new_slug != blog.slug && repo.select_by_field("slug", new_slug).await?.is_some() {
            return Err(ApiError::conflict("Blog with this slug already exists"));
        }
    }

    blog.apply_update(payload);
    repo.update(id, &blog).await?;
    Ok(Json(blog))
}

/// DELETE /api/blogs/:id - 404 when already gone, so a second delete of
/// the same id fails cleanly
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if !state.blogs().delete(id).await? {
        return Err(ApiError::not_found("Blog not found"));
    }
    Ok(Json(json!({ "message": "Blog removed" })))
}

fn validate_create(payload: &CreateBlog) -> Result<(), ApiError> {
    let required = [
        ("title", &payload.title),
        ("slug", &payload.slug),
        ("content", &payload.content),
        ("excerpt", &payload.excerpt),
        ("featuredImage", &payload.featured_image),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ApiError::validation_error(format!("Field '{}' is required", field)));
        }
    }
    Ok(())
}
