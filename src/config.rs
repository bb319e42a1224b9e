// src/config.rs

/// Default backend origin; the Flask backend listens on port 5000.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
/// Environment variable consulted when no explicit URL is given.
pub const API_URL_ENV: &str = "PROSPECT_API_URL";

const DEFAULT_USER_AGENT: &str = concat!("prospect-console/", env!("CARGO_PKG_VERSION"));

/// Settings for the backend connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Resolves the base URL: explicit override, then `PROSPECT_API_URL`, then the default.
    pub fn resolve(override_url: Option<&str>) -> Self {
        if let Some(url) = override_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Using API URL from command line: {}", url);
            return Self::with_base_url(url);
        }
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                tracing::debug!("Using API URL from {}: {}", API_URL_ENV, url);
                Self::with_base_url(url)
            }
            _ => {
                tracing::debug!("Using default API URL: {}", DEFAULT_API_URL);
                Self::default()
            }
        }
    }

    /// Joins an absolute endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
