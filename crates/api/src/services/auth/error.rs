//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] tradewithus_core::EmailError),

    /// Invalid credentials (wrong password or user not found).
    ///
    /// Covers both cases: the caller cannot distinguish an unknown email
    /// from a wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Bearer token missing, malformed, expired, or wrongly signed.
    #[error("invalid token")]
    InvalidToken,

    /// Token could not be signed.
    #[error("token creation failed")]
    TokenCreation,

    /// Caller's token does not own the target account.
    #[error("not authorized to act on this account")]
    NotAccountOwner,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
