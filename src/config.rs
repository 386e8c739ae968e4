use std::time::Duration;

use url::Url;

use crate::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = std::env::var("SETLIST_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = match std::env::var("SETLIST_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("SETLIST_API_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            request_timeout: Duration::from_secs(request_timeout),
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Parsed base URL of the setlist server.
    pub fn base_url(&self) -> Result<Url> {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| AppError::Config(format!("Invalid SETLIST_API_URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::Config(format!(
                "SETLIST_API_URL must use http or https, got {}",
                other
            ))),
        }
    }

    pub fn get_missing_config(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.api_url.trim().is_empty() {
            missing.push("SETLIST_API_URL".to_string());
        } else if self.base_url().is_err() {
            missing.push(format!("SETLIST_API_URL (invalid: {})", self.api_url));
        }
        if self.request_timeout.is_zero() {
            missing.push("SETLIST_API_TIMEOUT_SECS (must be greater than 0)".to_string());
        }

        missing
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = Config::default().with_api_url("http://setlists.local:8080/");
        let url = config.base_url().unwrap();
        assert_eq!(url.as_str(), "http://setlists.local:8080/");
        assert_eq!(url.host_str(), Some("setlists.local"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = Config::default().with_api_url("ftp://setlists.local");
        assert!(matches!(config.base_url(), Err(AppError::Config(_))));
        assert_eq!(config.get_missing_config().len(), 1);
    }

    #[test]
    fn test_missing_config_reports_empty_url() {
        let config = Config::default().with_api_url("  ");
        assert_eq!(config.get_missing_config(), vec!["SETLIST_API_URL".to_string()]);
    }

    #[test]
    fn test_default_config_is_complete() {
        assert!(Config::default().get_missing_config().is_empty());
    }
}
