use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use handlebars::Handlebars;

use crate::core::AppConfig;
use crate::notify::SubscriptionStore;
use crate::profiles::{ProfileSource, SampleProfiles};
use crate::web::templates;

/// Profile ids the user is watching, in the order they were added.
#[derive(Debug, Default)]
pub struct Watchlist {
    ids: Vec<String>,
}

impl Watchlist {
    /// Returns false if the id was already being watched.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Returns false if the id wasn't being watched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

pub struct AppState {
    pub config: AppConfig,
    // Date pages treat as "today" when formatting and flagging trades
    pub today: fn() -> NaiveDate,
    pub profiles: Arc<dyn ProfileSource>,
    pub subscriptions: SubscriptionStore,
    pub watchlist: Watchlist,
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_profiles(config, Arc::new(SampleProfiles))
    }

    pub fn with_profiles(config: AppConfig, profiles: Arc<dyn ProfileSource>) -> Self {
        Self {
            config,
            today: utc_today,
            profiles,
            subscriptions: SubscriptionStore::new(),
            watchlist: Watchlist::default(),
            templates: Arc::new(templates()),
        }
    }
}
