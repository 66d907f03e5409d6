use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{issue_token, token_validity, CredentialStore};
use crate::config;
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::models::admin::AdminProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
    pub token: String,
}

/// POST /api/admin/login - validate credentials and issue a session token.
/// Unknown username and wrong password produce the identical response so
/// usernames cannot be enumerated.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = payload
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation_error("Username and password are required"))?;
    let password = payload
        .password
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation_error("Username and password are required"))?;

    let credentials = CredentialStore::new(state.store.clone());
    let principal = credentials.find_by_username(username).await?;

    let Some(principal) = principal.filter(|p| credentials.verify_password(p, password)) else {
        return Err(ApiError::unauthorized("Invalid username or password"));
    };

    let token = issue_token(
        principal.id,
        &config::config().security.jwt_secret,
        token_validity(),
    )?;

    tracing::info!(admin = %principal.username, "admin login");

    Ok(Json(LoginResponse {
        id: principal.id,
        username: principal.username,
        token,
    }))
}

/// GET /api/admin/profile - the principal resolved by the access guard
pub async fn profile(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
) -> Result<Json<AdminProfile>, ApiError> {
    let principal = CredentialStore::new(state.store.clone())
        .find_by_id(admin.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Admin not found"))?;

    Ok(Json(AdminProfile::from(principal)))
}
