//! Router for the profiles API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// List every profile
async fn list_profiles(
    State(state): State<SharedState>,
) -> Result<Json<public::ProfilesResponse>, ApiError> {
    let source = state
        .read()
        .expect("Unable to read shared state")
        .profiles
        .clone();

    let profiles = source
        .list()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profiles", e))?;
    tracing::debug!(total = profiles.len(), "Fetched profiles");

    Ok(Json(public::ProfilesResponse::new(profiles)))
}

async fn get_profile(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::ProfileResponse>, ApiError> {
    let source = state
        .read()
        .expect("Unable to read shared state")
        .profiles
        .clone();

    let profile = source
        .find(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profiles", e))?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(public::ProfileResponse {
        success: true,
        data: profile,
    }))
}

/// Create the profiles router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(list_profiles))
        .route("/{id}", axum::routing::get(get_profile))
}
