//! Public types for the watchlist API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchRequest {
    pub profile_id: Option<String>,
}

#[derive(Serialize)]
pub struct UnwatchResponse {
    pub success: bool,
    pub removed: bool,
}
