//! Auth request payloads and bearer-token claims.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use tradewithus_core::UserId;

/// Signup request body.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupPayload {
    #[validate(required(message = "Name is required"), length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "Please enter a valid email"), email(message = "Please enter a valid email"))]
    pub email: Option<String>,
    #[validate(
        required(message = "Password must be at least 6 characters long"),
        length(min = 6, message = "Password must be at least 6 characters long")
    )]
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(required(message = "Please enter a valid email"), email(message = "Please enter a valid email"))]
    pub email: Option<String>,
    #[validate(required(message = "Password is required"), length(min = 1, message = "Password is required"))]
    pub password: Option<String>,
}

/// Claims carried by the signed bearer token.
///
/// The payload is exactly what `/auth/me` echoes back; protected handlers
/// never re-query the store for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Internal identifier of the authenticated user.
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// First violation message for an auth payload, checked in field order.
///
/// Mirrors the surface behavior of reporting a single message per failed
/// request rather than a violation list.
#[must_use]
pub fn auth_violation_message(errors: &ValidationErrors) -> String {
    for field in ["name", "email", "password"] {
        if let Some(ValidationErrorsKind::Field(violations)) = errors.errors().get(field)
            && let Some(violation) = violations.first()
        {
            return violation
                .message
                .as_ref()
                .map_or_else(|| format!("Invalid {field}"), ToString::to_string);
        }
    }
    "Invalid request".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_rejects_missing_name() {
        let payload = SignupPayload {
            name: None,
            email: Some("a@b.c".to_owned()),
            password: Some("secret123".to_owned()),
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(auth_violation_message(&errors), "Name is required");
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let payload = SignupPayload {
            name: Some("Jane".to_owned()),
            email: Some("a@b.c".to_owned()),
            password: Some("short".to_owned()),
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            auth_violation_message(&errors),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_signup_rejects_malformed_email() {
        let payload = SignupPayload {
            name: Some("Jane".to_owned()),
            email: Some("not-an-email".to_owned()),
            password: Some("secret123".to_owned()),
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(auth_violation_message(&errors), "Please enter a valid email");
    }

    #[test]
    fn test_login_accepts_valid_payload() {
        let payload = LoginPayload {
            email: Some("a@b.c".to_owned()),
            password: Some("whatever".to_owned()),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_login_reports_email_before_password() {
        // Both fields missing: the email violation is reported first
        let payload = LoginPayload {
            email: None,
            password: None,
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(auth_violation_message(&errors), "Please enter a valid email");
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = Claims {
            user_id: UserId::generate(),
            email: "jane@example.com".to_owned(),
            name: "Jane".to_owned(),
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("email").is_some());
        assert!(json.get("exp").is_some());
    }
}
