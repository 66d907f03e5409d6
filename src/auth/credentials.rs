use std::sync::Arc;
use uuid::Uuid;

use crate::models::admin::AdminPrincipal;
use crate::store::{DocumentStore, Repository, StoreError};

/// Read-only access to the single administrative principal. Creation happens
/// through the CLI provisioning command, never over HTTP.
pub struct CredentialStore {
    admins: Repository<AdminPrincipal>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            admins: Repository::new(AdminPrincipal::COLLECTION, store),
        }
    }

    /// Returns None for unknown usernames. Callers must not let the HTTP
    /// response distinguish "unknown user" from "wrong password".
    pub async fn find_by_username(&self, username: &str) -> Result<Option<AdminPrincipal>, StoreError> {
        self.admins.select_by_field("username", username).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminPrincipal>, StoreError> {
        self.admins.select_one(id).await
    }

    /// Constant-time comparison via bcrypt. Malformed stored hashes count
    /// as a failed match rather than an error.
    pub fn verify_password(&self, principal: &AdminPrincipal, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, &principal.password_hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::Utc;

    fn principal(username: &str, password: &str) -> AdminPrincipal {
        AdminPrincipal {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: bcrypt::hash(password, 4).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_lookup_and_password_check() {
        let store = Arc::new(MemoryStore::new());
        let admin = principal("admin", "hunter2");
        Repository::new(AdminPrincipal::COLLECTION, store.clone())
            .insert(admin.id, &admin)
            .await
            .unwrap();

        let credentials = CredentialStore::new(store);
        let found = credentials.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(found.id, admin.id);
        assert!(credentials.verify_password(&found, "hunter2"));
        assert!(!credentials.verify_password(&found, "wrong"));

        assert!(credentials.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_hash_fails_closed() {
        let store = Arc::new(MemoryStore::new());
        let credentials = CredentialStore::new(store);
        let mut admin = principal("admin", "hunter2");
        admin.password_hash = "not-a-bcrypt-hash".to_string();
        assert!(!credentials.verify_password(&admin, "hunter2"));
    }
}
