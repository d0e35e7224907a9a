//! Orchestrator module for the audit sink pipeline.
//!
//! Runs an ordered chain of nodes over one event at a time.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::errors::PipelineError;
use crate::formatter::OpenSearchFormatter;
use crate::node::Node;
use crate::sink::{OpenSearchSink, SinkConfig};
use audit_sink_search_index::DocumentIndexer;
use audit_sink_shared::Event;

/// Orchestrator that passes each event through its nodes in order.
///
/// The orchestrator:
/// - Stops at the first node that returns no event (a sink, or a filter
///   that dropped it)
/// - Stops at the first error and returns it untouched
/// - Holds no per-event state, so `process` can run concurrently
pub struct Orchestrator {
    nodes: Vec<Arc<dyn Node>>,
}

impl Orchestrator {
    /// Create an orchestrator over the given nodes.
    pub fn new(nodes: Vec<Arc<dyn Node>>) -> Self {
        Self { nodes }
    }

    /// Create the standard formatter → sink chain for OpenSearch.
    pub fn opensearch(client: Arc<dyn DocumentIndexer>, config: SinkConfig) -> Self {
        info!(
            index = %config.index_name,
            format = %config.format,
            "Building OpenSearch pipeline"
        );

        Self::new(vec![
            Arc::new(OpenSearchFormatter::new()) as Arc<dyn Node>,
            Arc::new(OpenSearchSink::with_config(client, config)),
        ])
    }

    /// The nodes in execution order.
    pub fn nodes(&self) -> &[Arc<dyn Node>] {
        &self.nodes
    }

    /// Run one event through the chain.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - A node consumed the event
    /// * `Ok(Some(event))` - Every node passed the event on
    /// * `Err(PipelineError)` - A node failed; later nodes did not run
    #[instrument(skip(self, cancel, event), fields(event_type = %event.event_type()))]
    pub async fn process(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<Option<Event>, PipelineError> {
        let mut current = event;

        for node in &self.nodes {
            match node.process(cancel, current).await? {
                Some(next) => current = next,
                None => {
                    debug!(node = node.name(), node_type = %node.node_type(), "Event consumed");
                    return Ok(None);
                }
            }
        }

        Ok(Some(current))
    }

    /// Reopen every node, stopping at the first failure.
    pub fn reopen(&self) -> Result<(), PipelineError> {
        for node in &self.nodes {
            node.reopen()?;
        }
        Ok(())
    }
}
