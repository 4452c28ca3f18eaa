//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use tower::util::ServiceExt;

use tradewatch::api::AppState;
use tradewatch::api::app;
use tradewatch::core::AppConfig;
use tradewatch::profiles::{Profile, ProfileSource};

pub fn test_config() -> AppConfig {
    AppConfig {
        vapid_public_key: Some(String::from("test-vapid-public-key")),
        image_domains: vec![
            String::from("images.unsplash.com"),
            String::from("avatars.githubusercontent.com"),
        ],
        static_dir: String::from("./web-ui/static"),
        recent_trade_days: 30,
    }
}

/// Creates a test application router backed by the sample profiles.
/// Each call gets its own empty subscription store and watchlist so
/// tests can run in parallel.
pub fn test_app() -> Router {
    test_app_with_config(test_config())
}

pub fn test_app_with_config(config: AppConfig) -> Router {
    app(Arc::new(RwLock::new(AppState::new(config))))
}

/// A profile source that always errors
pub struct FailingProfiles;

#[async_trait]
impl ProfileSource for FailingProfiles {
    async fn list(&self) -> Result<Vec<Profile>> {
        Err(anyhow!("profile source unavailable"))
    }
}

pub fn failing_app() -> Router {
    let state = AppState::with_profiles(test_config(), Arc::new(FailingProfiles));
    app(Arc::new(RwLock::new(state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method(method)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Shared state for tests that need to inspect it after a request
pub fn test_state() -> Arc<RwLock<AppState>> {
    Arc::new(RwLock::new(AppState::new(test_config())))
}

/// Fixed "today" for tests that depend on which trades are recent
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

pub fn test_state_on(today: fn() -> NaiveDate) -> Arc<RwLock<AppState>> {
    let mut state = AppState::new(test_config());
    state.today = today;
    Arc::new(RwLock::new(state))
}

/// POST a raw body with an optional content type header
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder().uri(uri).method("POST");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}
