//! Configuration types for the OpenSearch client.

use std::time::Duration;

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Connection settings for the search backend.
#[derive(Debug, Clone)]
pub struct SearchIndexConfig {
    /// The OpenSearch server URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Basic auth username. Auth is only sent when both username and
    /// password are set.
    pub username: Option<String>,
    /// Basic auth password.
    pub password: Option<String>,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
            username: None,
            password: None,
            timeout: None,
        }
    }
}

impl SearchIndexConfig {
    /// Create a config pointing at `url` with no auth and default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set basic auth credentials.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the credential pair when both halves are configured.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchIndexConfig::default();

        assert_eq!(config.url, DEFAULT_OPENSEARCH_URL);
        assert!(config.basic_auth().is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_basic_auth_requires_both_halves() {
        let mut config = SearchIndexConfig::new("https://search:9200");
        config.username = Some("admin".to_string());
        assert!(config.basic_auth().is_none());

        let config = config.with_basic_auth("admin", "secret");
        assert_eq!(config.basic_auth(), Some(("admin", "secret")));
    }

    #[test]
    fn test_with_timeout() {
        let config =
            SearchIndexConfig::new("http://localhost:9200").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
