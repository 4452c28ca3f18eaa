//! Router for the push API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, body::Bytes, extract::State};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::notify::{PushSubscription, SubscriptionKeys};

type SharedState = Arc<RwLock<AppState>>;

// Treat an empty string the same as a missing field
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// Register a client for push notifications
async fn push_subscription(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<public::MessageResponse>, ApiError> {
    // Parse regardless of the content type header
    let request: public::PushSubscriptionRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::internal("Failed to subscribe", e))?;

    let endpoint =
        required(request.endpoint).ok_or_else(|| ApiError::bad_request("Endpoint required"))?;
    let keys = request
        .keys
        .and_then(|k| {
            Some(SubscriptionKeys {
                p256dh: required(k.p256dh)?,
                auth: required(k.auth)?,
            })
        })
        .ok_or_else(|| ApiError::bad_request("Subscription keys required"))?;

    let is_new = state
        .write()
        .expect("Unable to write shared state")
        .subscriptions
        .insert(PushSubscription {
            endpoint: endpoint.clone(),
            keys,
            expiration_time: request.expiration_time,
        });
    tracing::info!(endpoint = %endpoint, is_new, "Stored push subscription");

    Ok(Json(public::MessageResponse::ok("Subscribed successfully")))
}

// Remove a client's push subscription. Unknown endpoints are not an
// error.
async fn push_unsubscribe(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<public::MessageResponse>, ApiError> {
    let request: public::UnsubscribeRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::internal("Failed to unsubscribe", e))?;

    let endpoint =
        required(request.endpoint).ok_or_else(|| ApiError::bad_request("Endpoint required"))?;

    let found = state
        .write()
        .expect("Unable to write shared state")
        .subscriptions
        .remove(&endpoint);
    if found {
        tracing::info!(endpoint = %endpoint, "Removed push subscription");
    } else {
        tracing::info!(endpoint = %endpoint, "Push subscription not found");
    }

    Ok(Json(public::MessageResponse::ok("Unsubscribed successfully")))
}

// Public key the browser needs to create a subscription
async fn vapid_public_key(
    State(state): State<SharedState>,
) -> Result<Json<public::VapidKeyResponse>, ApiError> {
    let public_key = state
        .read()
        .expect("Unable to read shared state")
        .config
        .vapid_public_key
        .clone()
        .ok_or_else(|| ApiError::not_found("VAPID public key not configured"))?;

    Ok(Json(public::VapidKeyResponse {
        success: true,
        public_key,
    }))
}

/// Create the push router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/subscribe", axum::routing::post(push_subscription))
        .route("/unsubscribe", axum::routing::post(push_unsubscribe))
        .route("/vapid-public-key", axum::routing::get(vapid_public_key))
}
