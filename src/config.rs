use log::Level;
use std::str::FromStr;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Config {
    /// Configuration baked in at build time.
    pub fn new() -> Self {
        Self::resolve(
            option_env!("OCTOFIT_API_URL"),
            option_env!("CODESPACE_NAME"),
            option_env!("OCTOFIT_LOG_LEVEL"),
        )
    }

    /// Runtime environment first, falling back to the build-time values.
    pub fn from_env() -> Self {
        let api_url = std::env::var("OCTOFIT_API_URL").ok();
        let codespace = std::env::var("CODESPACE_NAME").ok();
        let log_level = std::env::var("OCTOFIT_LOG_LEVEL").ok();
        Self::resolve(
            api_url.as_deref().or(option_env!("OCTOFIT_API_URL")),
            codespace.as_deref().or(option_env!("CODESPACE_NAME")),
            log_level.as_deref().or(option_env!("OCTOFIT_LOG_LEVEL")),
        )
    }

    fn resolve(api_url: Option<&str>, codespace: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = match (non_blank(api_url), non_blank(codespace)) {
            (Some(url), _) => url.trim_end_matches('/').to_string(),
            (None, Some(name)) => format!("https://{name}-8000.app.github.dev/api"),
            (None, None) => DEFAULT_API_URL.to_string(),
        };
        let log_level = non_blank(log_level)
            .and_then(|level| Level::from_str(level).ok())
            .unwrap_or(Level::Info);

        Self {
            api_base_url,
            log_level,
        }
    }

    /// Absolute URL for an endpoint path such as `/users/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        let config = Config::resolve(Some("https://api.octofit.io/api/"), Some("ignored"), None);
        assert_eq!(config.api_base_url, "https://api.octofit.io/api");
        assert_eq!(config.url("/users/"), "https://api.octofit.io/api/users/");
    }

    #[test]
    fn codespace_url() {
        let config = Config::resolve(None, Some("crispy-waffle"), None);
        assert_eq!(
            config.url("/teams/"),
            "https://crispy-waffle-8000.app.github.dev/api/teams/"
        );
    }

    #[test]
    fn local_fallback() {
        let config = Config::resolve(Some("  "), None, None);
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn log_level() {
        assert_eq!(Config::resolve(None, None, Some("debug")).log_level, Level::Debug);
        assert_eq!(Config::resolve(None, None, Some("loud")).log_level, Level::Info);
    }
}
