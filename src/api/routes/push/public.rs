//! Public types for the push API
use serde::{Deserialize, Serialize};

/// Every field is optional so that a missing value can be reported
/// as a 400 instead of a rejected body.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscriptionRequest {
    pub endpoint: Option<String>,
    pub keys: Option<SubscriptionKeysRequest>,
    pub expiration_time: Option<i64>,
}

#[derive(Deserialize)]
pub struct SubscriptionKeysRequest {
    pub p256dh: Option<String>,
    pub auth: Option<String>,
}

#[derive(Deserialize)]
pub struct UnsubscribeRequest {
    pub endpoint: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VapidKeyResponse {
    pub success: bool,
    pub public_key: String,
}
