use serde::{Deserialize, Serialize};

/// Encryption keys a browser hands out with its push subscription.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// A browser push subscription, keyed by its endpoint URL. Field
/// names match the JSON produced by `PushSubscription.toJSON()` in
/// the browser.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
    #[serde(default)]
    pub expiration_time: Option<i64>,
}
