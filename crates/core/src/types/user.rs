//! Public user shape returned by the auth endpoints.
//!
//! The full user record (including the password hash) never leaves the API
//! crate; this is the only user representation that crosses the wire.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::key::UserId;

/// The `{id, name, email}` user object embedded in auth responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}
