//! Dependency initialization and wiring for the audit sink.

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::SinkError;
use audit_sink_pipeline::Orchestrator;
use audit_sink_search_index::{DocumentIndexer, OpenSearchClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured formatter → sink chain.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Connect to OpenSearch and build the pipeline.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(SinkError)` - If the client cannot be built or the cluster is
    ///   unreachable
    pub async fn new(config: AppConfig) -> Result<Self, SinkError> {
        info!(
            opensearch_url = %config.search.url,
            index = %config.sink.index_name,
            format = %config.sink.format,
            "Initializing dependencies"
        );

        let search_client = OpenSearchClient::new(&config.search)
            .await
            .map_err(|e| SinkError::config(format!("Failed to create OpenSearch client: {}", e)))?;

        let healthy = search_client
            .health_check()
            .await
            .map_err(|e| SinkError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(SinkError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        Ok(Self::with_client(Arc::new(search_client), config))
    }

    /// Build the pipeline around an existing indexer.
    pub fn with_client(client: Arc<dyn DocumentIndexer>, config: AppConfig) -> Self {
        Self {
            orchestrator: Orchestrator::opensearch(client, config.sink),
        }
    }
}
