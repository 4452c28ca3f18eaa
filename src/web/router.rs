//! Router for the server rendered pages

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Query;
use chrono::NaiveDate;
use http::StatusCode;
use serde::Deserialize;

use super::templates::{Page, render_page};
use super::views::{
    HomeView, NotFoundView, ProfileDetailView, ProfileView, ProfilesView, WatchlistView,
};
use crate::api::public::ApiError;
use crate::api::routes::watchlist::watched_profiles;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::profiles::ProfileSource;

type SharedState = Arc<RwLock<AppState>>;

#[derive(Deserialize)]
pub struct ProfilesQuery {
    #[serde(default)]
    pub q: Option<String>,
}

// Everything a page handler needs without holding the lock across
// an await point
fn snapshot(
    state: &SharedState,
) -> (
    Arc<dyn ProfileSource>,
    AppConfig,
    Arc<handlebars::Handlebars<'static>>,
    NaiveDate,
) {
    let shared_state = state.read().expect("Unable to read shared state");
    (
        shared_state.profiles.clone(),
        shared_state.config.clone(),
        shared_state.templates.clone(),
        (shared_state.today)(),
    )
}

async fn home(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let (source, config, templates, today) = snapshot(&state);
    let profiles = source
        .list()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profiles", e))?;

    let view = HomeView::new(profiles, &config, today);
    Ok(Html(render_page(&templates, Page::Home, "Home", &view)?))
}

async fn profiles_page(
    State(state): State<SharedState>,
    Query(params): Query<ProfilesQuery>,
) -> Result<Html<String>, ApiError> {
    let (source, config, templates, today) = snapshot(&state);
    let query = params.q.unwrap_or_default();
    let profiles: Vec<_> = source
        .list()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profiles", e))?
        .into_iter()
        .filter(|p| p.matches(&query))
        .collect();

    let view = ProfilesView {
        query,
        total: profiles.len(),
        profiles: ProfileView::from_all(profiles, &config, today),
    };
    Ok(Html(render_page(&templates, Page::Profiles, "Profiles", &view)?))
}

async fn profile_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let (source, config, templates, today) = snapshot(&state);
    let profile = source
        .find(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profiles", e))?;

    let Some(profile) = profile else {
        let view = NotFoundView {
            message: format!("No profile with id '{}'", id),
        };
        let html = render_page(&templates, Page::NotFound, "Not found", &view)?;
        return Ok((StatusCode::NOT_FOUND, Html(html)).into_response());
    };

    let watched = state
        .read()
        .expect("Unable to read shared state")
        .watchlist
        .contains(&profile.id);
    let title = profile.name.clone();
    let view = ProfileDetailView {
        profile: ProfileView::new(profile, &config, today),
        watched,
    };
    Ok(Html(render_page(&templates, Page::Profile, &title, &view)?).into_response())
}

async fn watchlist_page(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let (_, config, templates, today) = snapshot(&state);
    let profiles = watched_profiles(&state)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch watchlist", e))?;

    let view = WatchlistView {
        total: profiles.len(),
        profiles: ProfileView::from_all(profiles, &config, today),
    };
    Ok(Html(render_page(&templates, Page::Watchlist, "Watchlist", &view)?))
}

/// Create the pages router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(home))
        .route("/profiles", axum::routing::get(profiles_page))
        .route("/profiles/{id}", axum::routing::get(profile_page))
        .route("/watchlist", axum::routing::get(watchlist_page))
}
