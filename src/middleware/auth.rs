use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{verify_token, CredentialStore};
use crate::config;
use crate::error::ApiError;
use crate::state::AppState;

/// Resolved admin principal attached to the request after the guard passes.
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub id: Uuid,
    pub username: String,
}

/// Access guard for protected routes. Every failure is terminal for the
/// request: missing/malformed header, bad signature, expired token, or a
/// principal that no longer exists all end in 401.
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers)?;

    let claims = verify_token(&token, &config::config().security.jwt_secret)?;

    let credentials = CredentialStore::new(state.store.clone());
    let principal = credentials
        .find_by_id(claims.sub)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Admin account no longer exists"))?;

    request.extensions_mut().insert(AuthAdmin {
        id: principal.id,
        username: principal.username,
    });

    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use Bearer token format"))?;

    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("Empty bearer token"));
    }

    Ok(token.to_string())
}
