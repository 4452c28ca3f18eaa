//! API routes module

pub mod profiles;
pub mod push;
pub mod watchlist;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Profile listing routes
        .nest("/profiles", profiles::router())
        // Push notification subscription routes
        .nest("/push", push::router())
        // Watchlist routes
        .nest("/watchlist", watchlist::router())
}
