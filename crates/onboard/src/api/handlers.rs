//! API request handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::profile::{Profile, ProfileDetail, SaveProfileRequest, SaveProfileResponse};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Create or update a profile.
///
/// POST /api/user/profile
#[instrument(skip(state, payload))]
pub async fn save_profile(
    State(state): State<AppState>,
    payload: Result<Json<SaveProfileRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SaveProfileResponse>)> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let outcome = state.profiles.save_profile(request).await?;
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// Get a profile with its interests, skills and goals.
///
/// GET /api/user/profile/{email}
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<ProfileDetail>> {
    state
        .profiles
        .get_profile(&email)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profile", &e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User not found"))
}

/// List all profiles, newest first.
///
/// GET /api/user/profiles
#[instrument(skip(state))]
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<Vec<Profile>>> {
    let profiles = state
        .profiles
        .list_profiles()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profiles", &e))?;
    Ok(Json(profiles))
}
