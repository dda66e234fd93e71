//! The uniform JSON response envelope.
//!
//! Every profile and product endpoint wraps its result in
//! `{"success": bool, "data": ..., "message": ...}`. The web front-end
//! decodes the same shape, so the type lives in core rather than in the
//! API crate.

use serde::{Deserialize, Serialize};

/// The `{success, data?, message?}` envelope.
///
/// `data` carries the payload on success; `message` carries a human-readable
/// outcome (error detail, or a confirmation such as "Profile deleted
/// successfully"). Absent fields are omitted from the serialized JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Response payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable outcome message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Successful response carrying only a message (e.g. after a delete).
    #[must_use]
    pub const fn ok_message(message: String) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message),
        }
    }

    /// Failed response carrying only a message.
    #[must_use]
    pub const fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}
