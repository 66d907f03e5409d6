use clap::Subcommand;
use std::sync::Arc;

use crate::auth::CredentialStore;
use crate::models::AdminPrincipal;
use crate::store::{PgStore, Repository};

#[derive(Subcommand)]
pub enum AdminCommands {
    #[command(about = "Create the administrative principal")]
    Create {
        username: String,
        password: String,
    },
}

pub async fn run(cmd: AdminCommands) -> anyhow::Result<()> {
    match cmd {
        AdminCommands::Create { username, password } => create(username, password).await,
    }
}

/// Out-of-band provisioning: the only way an admin principal comes into
/// existence. Refuses when the username is already taken.
async fn create(username: String, password: String) -> anyhow::Result<()> {
    let store = Arc::new(PgStore::connect().await?);

    let credentials = CredentialStore::new(store.clone());
    if credentials.find_by_username(&username).await?.is_some() {
        anyhow::bail!("Admin user already exists");
    }

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    let admin = AdminPrincipal::new(username, password_hash);

    Repository::new(AdminPrincipal::COLLECTION, store)
        .insert(admin.id, &admin)
        .await?;

    println!("Admin user {} created successfully", admin.username);
    Ok(())
}
