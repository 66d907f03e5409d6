use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact-form submission. Stored, then handed to the mail collaborator;
/// delivery is external to this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub const COLLECTION: &'static str = "contacts";

    pub fn new(req: ContactRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
            created_at: Utc::now(),
        }
    }
}
