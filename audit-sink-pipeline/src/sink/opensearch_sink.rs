//! OpenSearch sink implementation.
//!
//! Writes a formatted event to an index as a single document whose ID is the
//! SHA-256 of the document bytes, so redelivering the same event overwrites
//! the same document instead of duplicating it.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, warn};

use crate::errors::PipelineError;
use crate::node::Node;
use audit_sink_search_index::{DocumentIndexer, IndexRequest, IndexResponse};
use audit_sink_shared::{Event, NodeType, JSON_FORMAT};

/// Default index audit events are written to.
pub const DEFAULT_INDEX_NAME: &str = "audit-events";

/// Configuration for the OpenSearch sink.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Name of the index documents are written to.
    pub index_name: String,
    /// Format key the formatted bytes are read from. Empty falls back to
    /// [`JSON_FORMAT`].
    pub format: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            format: JSON_FORMAT.to_string(),
        }
    }
}

impl SinkConfig {
    /// Create a config for `index_name` reading the default format.
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            ..Default::default()
        }
    }

    /// Read formatted bytes from `format` instead of the default.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Terminal node that indexes formatted events into OpenSearch.
///
/// One event produces exactly one index request with `refresh=true`. There
/// is no batching and no retry; a failed write is reported to the caller.
pub struct OpenSearchSink {
    client: Arc<dyn DocumentIndexer>,
    config: SinkConfig,
}

impl OpenSearchSink {
    /// Create a sink writing to `index_name` with the default format key.
    pub fn new(client: Arc<dyn DocumentIndexer>, index_name: impl Into<String>) -> Self {
        Self {
            client,
            config: SinkConfig::new(index_name),
        }
    }

    /// Create a sink with custom configuration.
    pub fn with_config(client: Arc<dyn DocumentIndexer>, config: SinkConfig) -> Self {
        Self { client, config }
    }

    pub fn index_name(&self) -> &str {
        &self.config.index_name
    }

    /// The format key the sink reads from.
    pub fn format(&self) -> &str {
        if self.config.format.is_empty() {
            JSON_FORMAT
        } else {
            &self.config.format
        }
    }

    /// Lowercase hex SHA-256 of the document bytes.
    pub fn document_id(body: &[u8]) -> String {
        hex::encode(Sha256::digest(body))
    }

    fn validate_response(response: &IndexResponse) -> Result<(), PipelineError> {
        if !response.is_error() {
            return Ok(());
        }

        error!(
            status = %response.status,
            body = %String::from_utf8_lossy(&response.body),
            "Index request failed"
        );
        Err(PipelineError::backend(response.status, response.body.clone()))
    }
}

#[async_trait]
impl Node for OpenSearchSink {
    /// Index the event's formatted bytes.
    ///
    /// Always returns `Ok(None)` on success: sinks are leaves, nothing can
    /// happen to the event downstream.
    #[instrument(skip(self, cancel, event), fields(index = %self.config.index_name))]
    async fn process(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<Option<Event>, PipelineError> {
        let format = self.format();
        let body = event
            .format(format)
            .ok_or_else(|| PipelineError::not_marshaled(format))?;

        let request = IndexRequest {
            index: self.config.index_name.clone(),
            document_id: Self::document_id(body),
            body: body.to_vec(),
            refresh: true,
        };

        // Dropping the request future on cancellation aborts the HTTP call.
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(document_id = %request.document_id, "Index request cancelled");
                return Err(PipelineError::Cancelled);
            }
            result = self.client.index_document(&request) => result?,
        };

        Self::validate_response(&response)?;

        debug!(
            document_id = %request.document_id,
            status = %response.status,
            "Indexed event"
        );
        Ok(None)
    }

    // Holds no rotatable resources.
    fn reopen(&self) -> Result<(), PipelineError> {
        Ok(())
    }

    fn node_type(&self) -> NodeType {
        NodeType::Sink
    }

    fn name(&self) -> &str {
        "OpenSearchSink"
    }
}
