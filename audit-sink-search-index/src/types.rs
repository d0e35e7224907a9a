//! Request and response types for a single document write.

pub use ::opensearch::http::StatusCode;

/// A request to write one document into an index.
///
/// The body is sent as-is; the caller decides the document ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRequest {
    /// Target index name.
    pub index: String,
    /// Document ID. Writing the same ID again overwrites the document.
    pub document_id: String,
    /// Raw JSON document.
    pub body: Vec<u8>,
    /// Make the document visible to search before the write returns.
    pub refresh: bool,
}

/// The backend's answer to an index write.
///
/// The body has already been read in full, so holding an `IndexResponse`
/// keeps no connection resources alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexResponse {
    /// HTTP status returned by the backend.
    pub status: StatusCode,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl IndexResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the backend rejected the write (any status outside 2xx).
    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }
}
