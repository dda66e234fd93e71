//! User domain type.
//!
//! Not `Serialize`: the password hash never crosses the wire. Responses
//! use [`UserInfo`] instead.

use chrono::{DateTime, Utc};

use tradewithus_core::{Email, UserId, UserInfo};

/// A registered user (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Internal identifier.
    pub id: UserId,
    /// Normalized (trimmed, lowercased) unique email address.
    pub email: Email,
    /// Argon2id password hash with per-record random salt.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The public `{id, name, email}` shape embedded in auth responses.
    #[must_use]
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
