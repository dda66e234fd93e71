//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! tw-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `API_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/api/migrations/` and are embedded at
//! compile time; the API binary itself never runs them on startup.

use tradewithus_api::db::create_pool;

use super::{CommandError, database_url};

/// Run the API database migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the connection
/// fails, or a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to API database...");
    let pool = create_pool(&database_url).await?;

    tracing::info!("Running API migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("API migrations complete!");
    Ok(())
}
