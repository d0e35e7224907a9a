//! Settings read from the environment.

use std::env;
use std::time::Duration;

use crate::logging::LogFormat;
use crate::SinkError;
use audit_sink_pipeline::sink::{SinkConfig, DEFAULT_INDEX_NAME};
use audit_sink_search_index::config::{SearchIndexConfig, DEFAULT_OPENSEARCH_URL};
use audit_sink_shared::JSON_FORMAT;

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search: SearchIndexConfig,
    pub sink: SinkConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: basic auth, used when both are set
    /// - `OPENSEARCH_TIMEOUT_SECS`: per-request timeout in seconds (default: transport default)
    /// - `AUDIT_INDEX_NAME`: target index (default: audit-events)
    /// - `AUDIT_FORMAT`: format key the sink reads (default: json)
    /// - `LOG_FORMAT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, SinkError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SinkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("OPENSEARCH_URL").unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string());
        let mut search = SearchIndexConfig::new(url);

        if let (Some(username), Some(password)) =
            (lookup("OPENSEARCH_USERNAME"), lookup("OPENSEARCH_PASSWORD"))
        {
            search = search.with_basic_auth(username, password);
        }

        if let Some(raw) = lookup("OPENSEARCH_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                SinkError::config(format!("Invalid OPENSEARCH_TIMEOUT_SECS '{}': {}", raw, e))
            })?;
            search = search.with_timeout(Duration::from_secs(secs));
        }

        let index_name =
            lookup("AUDIT_INDEX_NAME").unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());
        if index_name.trim().is_empty() {
            return Err(SinkError::config("AUDIT_INDEX_NAME must not be empty"));
        }
        let format = lookup("AUDIT_FORMAT").unwrap_or_else(|| JSON_FORMAT.to_string());
        let sink = SinkConfig::new(index_name).with_format(format);

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            search,
            sink,
            log_format,
        })
    }
}
