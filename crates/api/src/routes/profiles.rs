//! Profile route handlers.
//!
//! Reads are public; every mutating route requires a bearer token. Each
//! handler performs exactly one service call and wraps the outcome in the
//! `{success, data?, message?}` envelope.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use tradewithus_core::{ApiResponse, Profile, ProfileId};

use crate::error::{ApiError, Result};
use crate::middleware::AuthUser;
use crate::models::profile::{ProfileData, profile_violation_message};
use crate::services::ProfileService;
use crate::state::AppState;

/// Handle `GET /profile/all`.
pub async fn get_all(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Profile>>>> {
    let profiles = ProfileService::new(state.pool()).get_all().await?;
    Ok(Json(ApiResponse::ok(profiles)))
}

/// Handle `GET /profile/{profileId}`.
pub async fn get(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<ApiResponse<Profile>>> {
    let profile_id = parse_key(&profile_id)?;

    let profile = ProfileService::new(state.pool())
        .get(&profile_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_owned()))?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// Handle `POST /profile`.
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ProfileData>,
) -> Result<(StatusCode, Json<ApiResponse<Profile>>)> {
    let profile = validate_payload(payload)?;

    let created = ProfileService::new(state.pool()).create(&profile).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// Handle `PUT /profile/{profileId}`.
///
/// Full-document replace: the stored profile becomes exactly the supplied
/// payload; optional fields omitted from it are cleared.
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    Json(payload): Json<ProfileData>,
) -> Result<Json<ApiResponse<Profile>>> {
    let profile_id = parse_key(&profile_id)?;
    let profile = validate_payload(payload)?;

    let updated = ProfileService::new(state.pool())
        .update(&profile_id, &profile)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_owned()))?;

    Ok(Json(ApiResponse::ok(updated)))
}

/// Handle `DELETE /profile/{profileId}`.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let profile_id = parse_key(&profile_id)?;

    let deleted = ProfileService::new(state.pool()).delete(&profile_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Profile not found".to_owned()));
    }

    Ok(Json(ApiResponse::ok_message(
        "Profile deleted successfully".to_owned(),
    )))
}

/// Parse a path segment into a profile business key.
fn parse_key(raw: &str) -> Result<ProfileId> {
    ProfileId::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Run the presence checks and convert the payload into a domain document.
fn validate_payload(payload: ProfileData) -> Result<Profile> {
    if let Err(errors) = payload.validate() {
        return Err(ApiError::BadRequest(
            profile_violation_message(&errors).to_owned(),
        ));
    }

    payload
        .into_profile()
        .ok_or_else(|| ApiError::BadRequest("Missing required profile fields".to_owned()))
}
