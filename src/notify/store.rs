//! Process-local storage for push subscriptions. Entries only live
//! as long as the server process.

use std::collections::HashMap;

use super::models::PushSubscription;

#[derive(Debug, Default)]
pub struct SubscriptionStore {
    subscriptions: HashMap<String, PushSubscription>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the subscription, replacing any previous subscription
    /// with the same endpoint. Returns true if the endpoint was not
    /// already registered.
    pub fn insert(&mut self, subscription: PushSubscription) -> bool {
        self.subscriptions
            .insert(subscription.endpoint.clone(), subscription)
            .is_none()
    }

    /// Remove the subscription for `endpoint`. Removing an endpoint
    /// that isn't registered is not an error, it just returns false.
    pub fn remove(&mut self, endpoint: &str) -> bool {
        self.subscriptions.remove(endpoint).is_some()
    }

    pub fn get(&self, endpoint: &str) -> Option<&PushSubscription> {
        self.subscriptions.get(endpoint)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
