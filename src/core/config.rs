use std::env;

use http::Uri;

use crate::core::dates::DEFAULT_RECENT_TRADE_DAYS;

const DEFAULT_IMAGE_DOMAINS: &str = "images.unsplash.com,avatars.githubusercontent.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Public half of the VAPID key pair handed to browsers when they
    // subscribe to push notifications
    pub vapid_public_key: Option<String>,
    // Hosts profile avatars may be loaded from
    pub image_domains: Vec<String>,
    pub static_dir: String,
    pub recent_trade_days: i64,
}

impl AppConfig {
    /// Returns true if `url` is an http(s) URL whose host is one of
    /// the configured image domains.
    pub fn allows_image(&self, url: &str) -> bool {
        let Ok(uri) = url.parse::<Uri>() else {
            return false;
        };
        if !matches!(uri.scheme_str(), Some("http") | Some("https")) {
            return false;
        }
        uri.host()
            .map(|host| self.image_domains.iter().any(|d| d.eq_ignore_ascii_case(host)))
            .unwrap_or(false)
    }
}

fn parse_domains(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        let vapid_public_key = env::var("TRADEWATCH_VAPID_PUBLIC_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let image_domains = parse_domains(
            &env::var("TRADEWATCH_IMAGE_DOMAINS").unwrap_or(DEFAULT_IMAGE_DOMAINS.to_string()),
        );
        let static_dir =
            env::var("TRADEWATCH_STATIC_DIR").unwrap_or_else(|_| "./web-ui/static".to_string());
        let recent_trade_days = match env::var("TRADEWATCH_RECENT_TRADE_DAYS") {
            Ok(v) => v.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %v,
                    "Invalid TRADEWATCH_RECENT_TRADE_DAYS, using default of {}",
                    DEFAULT_RECENT_TRADE_DAYS
                );
                DEFAULT_RECENT_TRADE_DAYS
            }),
            Err(_) => DEFAULT_RECENT_TRADE_DAYS,
        };

        Self {
            vapid_public_key,
            image_domains,
            static_dir,
            recent_trade_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            vapid_public_key: None,
            image_domains: parse_domains(DEFAULT_IMAGE_DOMAINS),
            static_dir: String::from("./web-ui/static"),
            recent_trade_days: 30,
        }
    }

    #[test]
    fn it_parses_comma_separated_domains() {
        assert_eq!(
            parse_domains(" a.com, ,b.org,"),
            vec![String::from("a.com"), String::from("b.org")]
        );
    }

    #[test]
    fn it_allows_images_from_configured_domains() {
        let config = config();
        assert!(config.allows_image("https://images.unsplash.com/photo-1.jpg"));
        assert!(config.allows_image("http://avatars.githubusercontent.com/u/1?v=4"));
    }

    #[test]
    fn it_rejects_images_from_other_hosts() {
        let config = config();
        assert!(!config.allows_image("https://evil.example.com/a.png"));
        // Subdomains are not implicitly trusted
        assert!(!config.allows_image("https://cdn.images.unsplash.com/a.png"));
        assert!(!config.allows_image("ftp://images.unsplash.com/a.png"));
        assert!(!config.allows_image("/local/avatar.png"));
        assert!(!config.allows_image("not a url"));
    }
}
