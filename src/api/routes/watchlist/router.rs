//! Router for the watchlist API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::public::profiles::ProfilesResponse;
use crate::api::public::push::MessageResponse;
use crate::api::state::AppState;
use crate::profiles::Profile;

type SharedState = Arc<RwLock<AppState>>;

/// Profiles on the watchlist in the order they were added
pub async fn watched_profiles(state: &SharedState) -> anyhow::Result<Vec<Profile>> {
    let (source, ids) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.profiles.clone(),
            shared_state.watchlist.ids().to_vec(),
        )
    };

    let mut profiles = source.list().await?;
    Ok(ids
        .iter()
        .filter_map(|id| {
            profiles
                .iter()
                .position(|p| &p.id == id)
                .map(|idx| profiles.swap_remove(idx))
        })
        .collect())
}

async fn list_watchlist(
    State(state): State<SharedState>,
) -> Result<Json<ProfilesResponse>, ApiError> {
    let profiles = watched_profiles(&state)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch watchlist", e))?;
    Ok(Json(ProfilesResponse::new(profiles)))
}

async fn watch_profile(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let request: public::WatchRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::internal("Failed to update watchlist", e))?;

    let id = request
        .profile_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Profile id required"))?;

    let source = state
        .read()
        .expect("Unable to read shared state")
        .profiles
        .clone();
    source
        .find(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to update watchlist", e))?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    let added = state
        .write()
        .expect("Unable to write shared state")
        .watchlist
        .add(&id);
    tracing::info!(profile_id = %id, added, "Watching profile");

    let message = if added {
        "Added to watchlist"
    } else {
        "Already on watchlist"
    };
    Ok(Json(MessageResponse::ok(message)))
}

async fn unwatch_profile(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<public::UnwatchResponse> {
    let removed = state
        .write()
        .expect("Unable to write shared state")
        .watchlist
        .remove(&id);
    tracing::info!(profile_id = %id, removed, "Unwatched profile");

    Json(public::UnwatchResponse {
        success: true,
        removed,
    })
}

/// Create the watchlist router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(list_watchlist).post(watch_profile))
        .route("/{id}", axum::routing::delete(unwatch_profile))
}
