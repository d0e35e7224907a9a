//! OpenSearch formatter implementation.
//!
//! Renders an event as a JSON document with exactly three fields:
//!
//! ```text
//! {"created_at":"<RFC 3339>","event_type":"<string>","payload":<json>}\n
//! ```

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use super::encoder;
use crate::errors::PipelineError;
use crate::node::Node;
use audit_sink_shared::{Event, EventType, NodeType};

/// Format name the formatter stores its output under.
pub const OPENSEARCH_FORMAT: &str = "json";

/// The document stored in the search index for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenSearchDocument {
    /// When the event was created.
    #[serde(serialize_with = "serialize_rfc3339")]
    pub created_at: DateTime<Utc>,
    /// The event's type tag.
    pub event_type: EventType,
    /// The event payload as generic JSON.
    pub payload: Value,
}

/// UTC timestamps end in `Z`. Fractional seconds keep only their
/// significant digits: `.1Z`, `.1234Z`, or none at all on a whole second.
fn serialize_rfc3339<S>(created_at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&rfc3339_trimmed(created_at))
}

fn rfc3339_trimmed(created_at: &DateTime<Utc>) -> String {
    let nanos = created_at.to_rfc3339_opts(SecondsFormat::Nanos, true);
    let trimmed = nanos
        .trim_end_matches('Z')
        .trim_end_matches('0')
        .trim_end_matches('.');
    format!("{}Z", trimmed)
}

/// Formatter node that renders events as OpenSearch documents.
///
/// The output is deterministic: the same timestamp, type and payload always
/// produce the same bytes. Object keys in the payload come out sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSearchFormatter;

impl OpenSearchFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render an event as document bytes, terminated by a newline.
    pub fn format_event(&self, event: &Event) -> Result<Vec<u8>, PipelineError> {
        let payload_bytes = event
            .payload()
            .marshal()
            .map_err(|e| PipelineError::serialization(format!("failed to marshal payload: {}", e)))?;

        let payload: Value = serde_json::from_slice(&payload_bytes).map_err(|e| {
            PipelineError::serialization(format!("failed to unmarshal payload: {}", e))
        })?;

        let document = OpenSearchDocument {
            created_at: event.created_at(),
            event_type: event.event_type().clone(),
            payload,
        };

        let mut buf = encoder::to_vec(&document)
            .map_err(|e| PipelineError::serialization(format!("failed to encode document: {}", e)))?;
        buf.push(b'\n');

        Ok(buf)
    }
}

#[async_trait]
impl Node for OpenSearchFormatter {
    /// Format the event as JSON and store it under [`OPENSEARCH_FORMAT`].
    #[instrument(skip(self, _cancel, event), fields(event_type = %event.event_type()))]
    async fn process(
        &self,
        _cancel: &CancellationToken,
        mut event: Event,
    ) -> Result<Option<Event>, PipelineError> {
        let buf = self.format_event(&event)?;
        debug!(bytes = buf.len(), "Formatted event");

        event.formatted_as(OPENSEARCH_FORMAT, buf);
        Ok(Some(event))
    }

    // Nothing to rotate.
    fn reopen(&self) -> Result<(), PipelineError> {
        Ok(())
    }

    fn node_type(&self) -> NodeType {
        NodeType::Formatter
    }

    fn name(&self) -> &str {
        "OpenSearchFormatter"
    }
}
