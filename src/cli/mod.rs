pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "causebase")]
#[command(about = "Causebase CLI - admin provisioning and seed data for the charity API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Admin principal provisioning")]
    Admin {
        #[command(subcommand)]
        cmd: commands::admin::AdminCommands,
    },

    #[command(about = "Load starter content into an empty store")]
    Seed,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Admin { cmd } => commands::admin::run(cmd).await,
        Commands::Seed => commands::seed::run().await,
    }
}
