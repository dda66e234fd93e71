//! Store status command.
//!
//! Reports whether each collection holds any documents, using the same
//! existence checks the repositories expose.

use tradewithus_api::db::{ProductRepository, ProfileRepository, UserRepository, create_pool};

use super::{CommandError, database_url};

/// Report whether each collection has been populated.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing or a query fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;
    let pool = create_pool(&database_url).await?;

    let users = UserRepository::new(&pool).exists().await?;
    let profiles = ProfileRepository::new(&pool).exists().await?;
    let products = ProductRepository::new(&pool).exists().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("users:    {}", populated(users));
        println!("profiles: {}", populated(profiles));
        println!("products: {}", populated(products));
    }

    Ok(())
}

/// Display label for an existence check.
const fn populated(exists: bool) -> &'static str {
    if exists { "populated" } else { "empty" }
}
