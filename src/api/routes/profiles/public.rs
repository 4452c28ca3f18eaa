//! Public types for the profiles API
use serde::Serialize;

use crate::profiles::Profile;

#[derive(Serialize)]
pub struct ProfilesResponse {
    pub success: bool,
    pub data: Vec<Profile>,
    // Always equal to `data.len()`
    pub total: usize,
}

impl ProfilesResponse {
    pub fn new(data: Vec<Profile>) -> Self {
        Self {
            success: true,
            total: data.len(),
            data,
        }
    }
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub data: Profile,
}
