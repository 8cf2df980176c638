use miette::Diagnostic;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("CLICKUP_API_TOKEN environment variable is not set")]
    #[diagnostic(
        code(clickup_mcp::config::missing_token),
        help(
            "Set CLICKUP_API_TOKEN to a personal API token (Settings > Apps in ClickUp) \
             or run `clickup-mcp get-token` to obtain an OAuth access token"
        )
    )]
    MissingToken,
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_token: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Reads `CLICKUP_API_TOKEN` (required) and `CLICKUP_API_URL` (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = std::env::var("CLICKUP_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let base_url = std::env::var("CLICKUP_API_URL")
            .ok()
            .filter(|u| !u.trim().is_empty());
        Ok(Self::new(api_token, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_applies_when_unset() {
        let config = Config::new("pk_test", None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_token, "pk_test");
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = Config::new("pk_test", Some("http://localhost:8080/api".into()));
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }
}
