//! The contract every pipeline stage implements.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::PipelineError;
use audit_sink_shared::{Event, NodeType};

/// A stage in the event pipeline.
///
/// Nodes are stateless between calls and may be invoked concurrently for
/// different events.
#[async_trait]
pub trait Node: Send + Sync {
    /// Process one event.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(event))` - Pass the event on to the next node
    /// * `Ok(None)` - Processing is complete; nothing downstream runs
    /// * `Err(PipelineError)` - Processing failed for this event
    async fn process(
        &self,
        cancel: &CancellationToken,
        event: Event,
    ) -> Result<Option<Event>, PipelineError>;

    /// Reopen any rotatable resources (files, sockets) the node holds.
    fn reopen(&self) -> Result<(), PipelineError>;

    /// The role this node plays.
    fn node_type(&self) -> NodeType;

    /// Name used in logs.
    fn name(&self) -> &str;
}
