//! Search index error types.
//!
//! This module defines the errors that can occur while talking to the
//! search backend. A response the backend sends back with an error status is
//! not one of these; it is returned as an `IndexResponse` for the caller to
//! validate.

use thiserror::Error;

/// Errors that can occur during search index operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Failed to build a client for the configured backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not produce a response (network, TLS, timeout).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The response arrived but its body could not be read.
    #[error("Response error: {0}")]
    ResponseError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a response error.
    pub fn response(msg: impl Into<String>) -> Self {
        Self::ResponseError(msg.into())
    }
}
