use anyhow::{Context, Result};
use async_trait::async_trait;

use super::models::Profile;

// Sample dataset compiled into the binary
const SAMPLE_PROFILES: &str = include_str!("../../data/profiles.json");

/// Somewhere profiles can be loaded from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn list(&self) -> Result<Vec<Profile>>;

    async fn find(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.list().await?.into_iter().find(|p| p.id == id))
    }
}

/// Serves the bundled sample profiles verbatim.
#[derive(Debug, Default)]
pub struct SampleProfiles;

#[async_trait]
impl ProfileSource for SampleProfiles {
    async fn list(&self) -> Result<Vec<Profile>> {
        serde_json::from_str(SAMPLE_PROFILES).context("Failed to parse sample profiles")
    }
}
