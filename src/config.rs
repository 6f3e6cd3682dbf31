//! Backend connection settings.

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API URL must not be empty")]
    EmptyUrl,
    #[error("API URL must start with http:// or https:// (got {0})")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Validate and normalise the API base URL (no trailing slash).
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }

        let lower = trimmed.to_ascii_lowercase();
        if !lower.starts_with("http://") && !lower.starts_with("https://") {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }

        Ok(Self {
            api_url: trimmed.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().api_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ClientConfig::new(" https://quiz.example/api// ").unwrap();
        assert_eq!(config.api_url(), "https://quiz.example/api");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert_eq!(ClientConfig::new("  "), Err(ConfigError::EmptyUrl));
        assert!(matches!(
            ClientConfig::new("ftp://quiz.example"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
