//! Auth route handlers.
//!
//! These endpoints keep the original surface's bare `{message, ...}` response
//! shape rather than the `{success, data}` envelope, and report fixed
//! messages that never reveal which credential check failed.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use tradewithus_core::UserId;

use crate::middleware::AuthUser;
use crate::models::auth::{LoginPayload, SignupPayload, auth_violation_message};
use crate::services::AuthService;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Bare `{message}` response used by the auth surface.
fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// Handle `POST /auth/signup`.
pub async fn signup(State(state): State<AppState>, Json(payload): Json<SignupPayload>) -> Response {
    if let Err(errors) = payload.validate() {
        return message_response(StatusCode::BAD_REQUEST, &auth_violation_message(&errors));
    }

    // Validated Some above
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let service = AuthService::new(state.pool(), &state.config().jwt_secret);
    match service.signup(&name, &email, &password).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "User created successfully",
                "user": user.info(),
            })),
        )
            .into_response(),
        Err(AuthError::UserAlreadyExists) => message_response(
            StatusCode::BAD_REQUEST,
            "User already exists with this email",
        ),
        Err(AuthError::InvalidEmail(_)) => {
            message_response(StatusCode::BAD_REQUEST, "Please enter a valid email")
        }
        Err(AuthError::WeakPassword(message)) => {
            message_response(StatusCode::BAD_REQUEST, &message)
        }
        Err(err) => {
            tracing::error!(error = %err, "Signup error");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

/// Handle `POST /auth/login`.
pub async fn login(State(state): State<AppState>, Json(payload): Json<LoginPayload>) -> Response {
    if let Err(errors) = payload.validate() {
        return message_response(StatusCode::BAD_REQUEST, &auth_violation_message(&errors));
    }

    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let service = AuthService::new(state.pool(), &state.config().jwt_secret);
    match service.login(&email, &password).await {
        Ok((token, user)) => Json(json!({
            "message": "Login successful",
            "token": token,
            "user": user.info(),
        }))
        .into_response(),
        Err(AuthError::InvalidCredentials) => {
            message_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
        }
        Err(err) => {
            tracing::error!(error = %err, "Login error");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

/// Handle `GET /auth/me`.
///
/// The response is built from the token payload alone; the store is never
/// queried.
pub async fn me(AuthUser(claims): AuthUser) -> Response {
    Json(json!({
        "user": {
            "id": claims.user_id,
            "name": claims.name,
            "email": claims.email,
        }
    }))
    .into_response()
}

/// Handle `DELETE /auth/user/{userId}`.
///
/// Self-service only: the token's `userId` must match the target.
pub async fn delete_user(
    AuthUser(claims): AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(target) = user_id.parse::<UserId>() else {
        return envelope_response(StatusCode::NOT_FOUND, false, "User not found");
    };

    let service = AuthService::new(state.pool(), &state.config().jwt_secret);
    match service.delete_user(claims.user_id, target).await {
        Ok(true) => envelope_response(StatusCode::OK, true, "User deleted successfully"),
        Ok(false) => {
            envelope_response(StatusCode::INTERNAL_SERVER_ERROR, false, "Failed to delete user")
        }
        Err(AuthError::UserNotFound) => {
            envelope_response(StatusCode::NOT_FOUND, false, "User not found")
        }
        Err(AuthError::NotAccountOwner) => envelope_response(
            StatusCode::FORBIDDEN,
            false,
            "Not authorized to delete this user",
        ),
        Err(err) => {
            tracing::error!(error = %err, "Delete user error");
            envelope_response(StatusCode::INTERNAL_SERVER_ERROR, false, "Server error")
        }
    }
}

/// `{success, message}` response used by the account-deletion endpoint.
fn envelope_response(status: StatusCode, success: bool, message: &str) -> Response {
    (status, Json(json!({ "success": success, "message": message }))).into_response()
}
