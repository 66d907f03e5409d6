use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Pending,
    ProofSubmitted,
}

/// A recorded donation intent. The actual payment happens at an external
/// gateway; this only tracks the reference and any uploaded proof metadata.
/// `cause_id` is deliberately not validated against the causes collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub reference: String,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub cause_id: Option<Uuid>,
    pub status: DonationStatus,
    #[serde(default)]
    pub proof_filename: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonation {
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub cause_id: Option<Uuid>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProofRequest {
    pub donation_id: Uuid,
    pub filename: String,
}

impl Donation {
    pub const COLLECTION: &'static str = "donations";

    pub fn new(req: CreateDonation) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: req.reference.unwrap_or_else(generate_reference),
            donor_name: req.donor_name,
            email: req.email,
            amount: req.amount,
            cause_id: req.cause_id,
            status: DonationStatus::Pending,
            proof_filename: None,
            created_at: Utc::now(),
        }
    }

    pub fn attach_proof(&mut self, filename: String) {
        self.proof_filename = Some(filename);
        self.status = DonationStatus::ProofSubmitted;
    }
}

/// Opaque payment reference handed to the external gateway, e.g. DON-9F2C41AB.
pub fn generate_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("DON-{}", id[..8].to_uppercase())
}
