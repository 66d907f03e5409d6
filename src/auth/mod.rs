pub mod credentials;

pub use credentials::CredentialStore;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

/// Claims carried by an admin session token. Stateless: the token encodes
/// its own expiry and nothing is persisted server-side.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(principal_id: Uuid, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: principal_id,
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    Issue(String),

    #[error("Invalid JWT token: {0}")]
    Invalid(String),
}

/// Issue a signed session token for a validated principal.
/// Pure computation; no side effects beyond signing.
pub fn issue_token(principal_id: Uuid, secret: &str, validity: Duration) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let claims = Claims::new(principal_id, validity);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| TokenError::Issue(e.to_string()))
}

/// Verify signature and expiry, returning the decoded claims.
/// A token is valid iff the signature verifies AND now < exp.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenError::Invalid(e.to_string()))
}

/// Validity window for newly issued tokens (30 days by default).
pub fn token_validity() -> Duration {
    Duration::days(config::config().security.token_validity_days)
}
