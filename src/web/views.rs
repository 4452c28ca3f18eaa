//! View models for the page templates. All of the date formatting
//! happens here so the templates only have to print fields.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::AppConfig;
use crate::core::dates::{format_date, format_date_long, format_relative, is_recent_trade};
use crate::profiles::Profile;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub title: String,
    pub party: String,
    pub state: String,
    pub chamber: String,
    pub bio: String,
    // Only set when the image host is allowed by the config
    pub avatar_url: Option<String>,
    pub trade_count: u32,
    pub last_trade: String,
    pub last_trade_long: String,
    pub last_trade_relative: String,
    pub recent: bool,
}

impl ProfileView {
    pub fn new(profile: Profile, config: &AppConfig, today: NaiveDate) -> Self {
        let avatar_url = profile
            .avatar_url
            .filter(|url| config.allows_image(url));
        if avatar_url.is_none() {
            tracing::trace!(profile_id = %profile.id, "No allowed avatar for profile");
        }
        let date = profile.last_trade_date;

        Self {
            avatar_url,
            last_trade: format_date(date),
            last_trade_long: format_date_long(date),
            last_trade_relative: format_relative(date, today),
            recent: is_recent_trade(date, today, config.recent_trade_days),
            id: profile.id,
            name: profile.name,
            title: profile.title,
            party: profile.party,
            state: profile.state,
            chamber: profile.chamber,
            bio: profile.bio,
            trade_count: profile.trade_count,
        }
    }

    pub fn from_all(profiles: Vec<Profile>, config: &AppConfig, today: NaiveDate) -> Vec<Self> {
        profiles
            .into_iter()
            .map(|p| Self::new(p, config, today))
            .collect()
    }
}

#[derive(Serialize)]
pub struct HomeView {
    pub total: usize,
    pub recent_count: usize,
    pub recent: Vec<ProfileView>,
}

impl HomeView {
    /// Recently active profiles first, most recent trade at the top.
    pub fn new(mut profiles: Vec<Profile>, config: &AppConfig, today: NaiveDate) -> Self {
        let total = profiles.len();
        profiles.sort_by(|a, b| b.last_trade_date.cmp(&a.last_trade_date));
        let recent: Vec<ProfileView> = ProfileView::from_all(profiles, config, today)
            .into_iter()
            .filter(|p| p.recent)
            .collect();

        Self {
            total,
            recent_count: recent.len(),
            recent,
        }
    }
}

#[derive(Serialize)]
pub struct ProfilesView {
    pub query: String,
    pub total: usize,
    pub profiles: Vec<ProfileView>,
}

#[derive(Serialize)]
pub struct ProfileDetailView {
    pub profile: ProfileView,
    pub watched: bool,
}

#[derive(Serialize)]
pub struct WatchlistView {
    pub total: usize,
    pub profiles: Vec<ProfileView>,
}

#[derive(Serialize)]
pub struct NotFoundView {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            vapid_public_key: None,
            image_domains: vec![String::from("images.unsplash.com")],
            static_dir: String::from("./web-ui/static"),
            recent_trade_days: 30,
        }
    }

    fn profile(id: &str, last_trade_date: NaiveDate, avatar_url: Option<&str>) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Name {}", id),
            title: String::from("Senator"),
            party: String::from("Independent"),
            state: String::from("Vermont"),
            chamber: String::from("Senate"),
            avatar_url: avatar_url.map(String::from),
            trade_count: 3,
            last_trade_date,
            bio: String::from("Bio"),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn it_formats_profile_dates() {
        let today = date(2024, 6, 30);
        let view = ProfileView::new(profile("a", date(2024, 6, 27), None), &config(), today);
        assert_eq!(view.last_trade, "Jun 27, 2024");
        assert_eq!(view.last_trade_long, "June 27, 2024");
        assert_eq!(view.last_trade_relative, "3 days ago");
        assert!(view.recent);
    }

    #[test]
    fn it_drops_avatars_from_unknown_hosts() {
        let today = date(2024, 6, 30);
        let allowed = ProfileView::new(
            profile("a", today, Some("https://images.unsplash.com/a.jpg")),
            &config(),
            today,
        );
        let blocked = ProfileView::new(
            profile("b", today, Some("https://cdn.example.com/b.jpg")),
            &config(),
            today,
        );
        assert_eq!(
            allowed.avatar_url.as_deref(),
            Some("https://images.unsplash.com/a.jpg")
        );
        assert_eq!(blocked.avatar_url, None);
    }

    #[test]
    fn it_lists_only_recent_profiles_on_the_home_page() {
        let today = date(2024, 6, 30);
        let home = HomeView::new(
            vec![
                profile("old", date(2024, 1, 1), None),
                profile("boundary", date(2024, 5, 31), None),
                profile("newest", date(2024, 6, 29), None),
            ],
            &config(),
            today,
        );
        assert_eq!(home.total, 3);
        assert_eq!(home.recent_count, 2);
        let ids: Vec<&str> = home.recent.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "boundary"]);
    }
}
