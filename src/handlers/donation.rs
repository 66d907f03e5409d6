use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::donation::{generate_reference, CreateDonation, Donation, UploadProofRequest};
use crate::state::AppState;

/// GET /api/donation/generate-reference - fresh reference for the
/// external payment flow
pub async fn reference() -> Json<Value> {
    Json(json!({ "reference": generate_reference() }))
}

/// POST /api/donation - record a donation intent. The payment itself is
/// handled by the external gateway; the referenced cause is deliberately
/// not validated to exist.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateDonation>,
) -> Result<(StatusCode, Json<Donation>), ApiError> {
    if payload.amount <= 0.0 {
        return Err(ApiError::validation_error("amount must be greater than zero"));
    }

    let donation = Donation::new(payload);
    state.donations().insert(donation.id, &donation).await?;
    Ok((StatusCode::CREATED, Json(donation)))
}

/// POST /api/donation/upload-proof - attach proof-of-payment metadata to
/// an existing donation
pub async fn upload_proof(
    State(state): State<AppState>,
    Json(payload): Json<UploadProofRequest>,
) -> Result<Json<Donation>, ApiError> {
    if payload.filename.trim().is_empty() {
        return Err(ApiError::validation_error("Field 'filename' is required"));
    }

    let repo = state.donations();
    let mut donation = repo
        .select_one(payload.donation_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Donation not found"))?;

    donation.attach_proof(payload.filename);
    repo.update(donation.id, &donation).await?;
    Ok(Json(donation))
}
