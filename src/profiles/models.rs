use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public trading profile as served by the listing endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub party: String,
    pub state: String,
    pub chamber: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub trade_count: u32,
    pub last_trade_date: NaiveDate,
    pub bio: String,
}

impl Profile {
    /// Case insensitive match against the name or state.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.state.to_lowercase().contains(&query)
    }
}
