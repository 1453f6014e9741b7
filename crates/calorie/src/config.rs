use reqwest::Url;

use crate::error::Error;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "CALORIE_API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Food API configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Load configuration from environment variables
    /// Uses CALORIE_API_URL with default fallback
    pub fn from_env() -> Result<Self, Error> {
        let raw = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::parse(&raw)
    }

    /// Build a configuration from a base URL string
    ///
    /// Only `http` and `https` URLs are accepted. Trailing slashes are dropped
    /// so that endpoint paths join the same way with or without them.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| Error::InvalidConfig(format!("Invalid API URL '{raw}': {e}")))?;

        match base_url.scheme() {
            "http" | "https" => Ok(Self { base_url }),
            scheme => Err(Error::InvalidConfig(format!(
                "Unsupported scheme '{scheme}' in API URL '{raw}'"
            ))),
        }
    }

    /// Resolve the configuration, preferring the `--api-url` flag
    ///
    /// The environment is only consulted when no flag is given, so a broken
    /// CALORIE_API_URL does not get in the way of an explicit URL.
    pub fn resolve(api_url: Option<&str>) -> Result<Self, Error> {
        match api_url {
            Some(url) => Self::parse(url),
            None => Self::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default() {
        let config = ApiConfig::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_parse_strips_trailing_slash() {
        let config = ApiConfig::parse("https://calorie.example.com/proxy/").unwrap();
        assert_eq!(
            config.base_url.as_str(),
            "https://calorie.example.com/proxy"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = ApiConfig::parse("not a url");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        let result = ApiConfig::parse("ftp://calorie.example.com");
        assert!(matches!(result, Err(Error::InvalidConfig(msg)) if msg.contains("ftp")));
    }

    #[test]
    fn test_resolve_flag_wins_over_broken_env() {
        std::env::set_var(API_URL_ENV, "not a url");
        assert!(matches!(ApiConfig::from_env(), Err(Error::InvalidConfig(_))));

        let config = ApiConfig::resolve(Some("http://10.0.0.2:9000")).unwrap();
        assert_eq!(config.base_url.as_str(), "http://10.0.0.2:9000/");

        assert!(matches!(ApiConfig::resolve(None), Err(Error::InvalidConfig(_))));
        std::env::remove_var(API_URL_ENV);
    }
}
