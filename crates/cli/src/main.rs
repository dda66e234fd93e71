//! TradeWithUs CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run API database migrations
//! tw-cli migrate
//!
//! # Report store status (whether profiles/products/users exist)
//! tw-cli status
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `status` - Report whether each collection has been populated

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tw-cli")]
#[command(author, version, about = "TradeWithUs CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run API database migrations
    Migrate,
    /// Report whether each collection has been populated
    Status,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tw_cli=info,tradewithus_cli=info,sqlx=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Status => commands::status::run().await,
    };

    if let Err(err) = outcome {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
