//! Page templates using Handlebars. Strict mode is on so a view
//! model missing a field fails to render instead of silently
//! producing an empty string.

use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum Page {
    Layout,
    Loading,
    ProfileCard,
    Home,
    Profiles,
    Profile,
    Watchlist,
    NotFound,
}

impl Page {
    // Partials are referenced by name from inside other templates
    fn name(&self) -> &'static str {
        match self {
            Page::Layout => "layout",
            Page::Loading => "loading",
            Page::ProfileCard => "profile_card",
            Page::Home => "home",
            Page::Profiles => "profiles",
            Page::Profile => "profile",
            Page::Watchlist => "watchlist",
            Page::NotFound => "not_found",
        }
    }
}

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}} | TradeWatch</title>
<link rel="stylesheet" href="/styles.css">
</head>
<body>
<nav class="nav">
  <a class="brand" href="/">TradeWatch</a>
  <a href="/profiles">Profiles</a>
  <a href="/watchlist">Watchlist</a>
</nav>
<div id="page-loading" hidden>
{{> loading page_loading}}
</div>
<main>
{{{content}}}
</main>
<footer class="footer">
  <p>Trade disclosures are shown for informational purposes only.</p>
  <p><a href="/profiles">Browse profiles</a> · <a href="/watchlist">Your watchlist</a></p>
</footer>
</body>
</html>
"#;

const LOADING: &str = r#"<div class="loading loading-{{size}}" role="status" aria-live="polite">
  <span class="loading-spinner" aria-hidden="true"></span>
  {{#if text}}<span class="loading-text">{{text}}</span>{{/if}}
</div>"#;

const PROFILE_CARD: &str = r#"<article class="profile-card">
  {{#if avatar_url}}<img class="avatar" src="{{avatar_url}}" alt="{{name}}">{{/if}}
  <h2><a href="/profiles/{{id}}">{{name}}</a></h2>
  <p class="meta">{{title}} · {{party}} · {{state}}</p>
  <p class="trades">{{trade_count}} trades, last on {{last_trade}} ({{last_trade_relative}}){{#if recent}} <span class="badge">Recent</span>{{/if}}</p>
</article>"#;

const HOME: &str = r#"<section class="hero">
  <h1>Follow the trades</h1>
  <p>Tracking {{total}} profiles. {{recent_count}} traded recently.</p>
</section>
<section class="recent">
  <h2>Recent activity</h2>
  {{#each recent}}
  {{> profile_card}}
  {{else}}
  <p class="empty">No recent trades.</p>
  {{/each}}
</section>"#;

const PROFILES: &str = r#"<h1>Profiles</h1>
<form class="search" method="get" action="/profiles">
  <input type="search" name="q" value="{{query}}" placeholder="Search by name or state">
  <button type="submit">Search</button>
</form>
<p class="count">Showing {{total}} profiles</p>
{{#each profiles}}
{{> profile_card}}
{{else}}
<p class="empty">No profiles match your search.</p>
{{/each}}"#;

const PROFILE: &str = r#"<article class="profile">
  {{#if profile.avatar_url}}<img class="avatar avatar-lg" src="{{profile.avatar_url}}" alt="{{profile.name}}">{{/if}}
  <h1>{{profile.name}}</h1>
  <p class="meta">{{profile.title}} · {{profile.party}} · {{profile.state}} · {{profile.chamber}}</p>
  <p class="bio">{{profile.bio}}</p>
  <dl class="stats">
    <dt>Trades disclosed</dt><dd>{{profile.trade_count}}</dd>
    <dt>Last trade</dt><dd>{{profile.last_trade_long}} ({{profile.last_trade_relative}}){{#if profile.recent}} <span class="badge">Recent</span>{{/if}}</dd>
  </dl>
  <button class="watch" data-profile-id="{{profile.id}}">{{#if watched}}Watching{{else}}Add to watchlist{{/if}}</button>
</article>"#;

const WATCHLIST: &str = r#"<h1>Watchlist</h1>
<p class="count">{{total}} profiles watched</p>
{{#each profiles}}
{{> profile_card}}
{{else}}
<p class="empty">You're not watching anyone yet. <a href="/profiles">Browse profiles</a></p>
{{/each}}"#;

const NOT_FOUND: &str = r#"<section class="not-found">
  <h1>Not found</h1>
  <p>{{message}}</p>
  <a href="/">Back home</a>
</section>"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    for (page, source) in [
        (Page::Layout, LAYOUT),
        (Page::Loading, LOADING),
        (Page::ProfileCard, PROFILE_CARD),
        (Page::Home, HOME),
        (Page::Profiles, PROFILES),
        (Page::Profile, PROFILE),
        (Page::Watchlist, WATCHLIST),
        (Page::NotFound, NOT_FOUND),
    ] {
        registry
            .register_template_string(page.name(), source)
            .expect("Failed to register template");
    }
    registry
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Serialize)]
pub struct LoadingContext {
    pub size: LoadingSize,
    pub text: Option<String>,
}

impl LoadingContext {
    pub fn new(size: LoadingSize, text: Option<&str>) -> Self {
        Self {
            size,
            // Blank text is the same as no text
            text: text.filter(|t| !t.trim().is_empty()).map(String::from),
        }
    }
}

#[derive(Serialize)]
struct LayoutContext<'a> {
    title: &'a str,
    content: String,
    page_loading: LoadingContext,
}

/// Render the loading indicator on its own.
pub fn loading_indicator(
    registry: &Handlebars,
    size: LoadingSize,
    text: Option<&str>,
) -> Result<String> {
    Ok(registry.render(Page::Loading.name(), &LoadingContext::new(size, text))?)
}

/// Render `page` with `data` and wrap it in the shared layout.
pub fn render_page<T: Serialize>(
    registry: &Handlebars,
    page: Page,
    title: &str,
    data: &T,
) -> Result<String> {
    let content = registry.render(page.name(), data)?;
    let layout = LayoutContext {
        title,
        content,
        page_loading: LoadingContext::new(LoadingSize::Lg, Some("Loading...")),
    };
    Ok(registry.render(Page::Layout.name(), &layout)?)
}
