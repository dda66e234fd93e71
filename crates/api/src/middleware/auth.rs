//! Authentication middleware and extractors.
//!
//! Provides an extractor for requiring a valid bearer token in route
//! handlers. Verification is signature + expiry only; the decoded claims are
//! handed to the handler without a store round-trip.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::auth::Claims;
use crate::services::auth::decode_token;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(AuthUser(claims): AuthUser) -> impl IntoResponse {
///     format!("Hello, {}!", claims.name)
/// }
/// ```
pub struct AuthUser(pub Claims);

/// Error returned when a bearer token is required but missing or invalid.
pub enum AuthRejection {
    /// No `Authorization: Bearer` header on the request.
    MissingToken,
    /// Signature or expiry check failed.
    InvalidToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingToken => "No token, authorization denied",
            Self::InvalidToken => "Token is not valid",
        };
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or(AuthRejection::MissingToken)?;

        let claims = decode_token(token, &state.config().jwt_secret)
            .map_err(|_| AuthRejection::InvalidToken)?;

        Ok(Self(claims))
    }
}
