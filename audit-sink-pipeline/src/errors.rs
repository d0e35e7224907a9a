//! Error types for the audit sink pipeline.

use audit_sink_search_index::{SearchIndexError, StatusCode};
use thiserror::Error;

/// Errors that can occur while a node processes an event.
///
/// Every variant aborts processing of that one event. Nothing is retried
/// here; the caller decides whether to resubmit the event.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The event could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The sink found no rendering under its format key, which means the
    /// formatter did not run or was configured with another key.
    #[error("event was not marshaled")]
    NotMarshaled { format: String },

    /// The search backend could not be reached or its answer could not be read.
    #[error("Search index error: {0}")]
    SearchIndex(#[from] SearchIndexError),

    /// The backend answered but rejected the write.
    #[error("unhandled error ({status}): {}", String::from_utf8_lossy(.body))]
    Backend { status: StatusCode, body: Vec<u8> },

    /// The caller cancelled processing before the write completed.
    #[error("Processing cancelled")]
    Cancelled,
}

impl PipelineError {
    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a not-marshaled error for the given format key.
    pub fn not_marshaled(format: impl Into<String>) -> Self {
        Self::NotMarshaled {
            format: format.into(),
        }
    }

    /// Create a backend error from a rejected response.
    pub fn backend(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::Backend {
            status,
            body: body.into(),
        }
    }
}
