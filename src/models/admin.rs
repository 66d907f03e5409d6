use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single administrative principal. Owned by the credential store;
/// provisioned out-of-band via the CLI, read on every login attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPrincipal {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl AdminPrincipal {
    pub const COLLECTION: &'static str = "admins";

    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// What /api/admin/profile returns: the principal without its hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<AdminPrincipal> for AdminProfile {
    fn from(principal: AdminPrincipal) -> Self {
        Self {
            id: principal.id,
            username: principal.username,
            created_at: principal.created_at,
        }
    }
}
