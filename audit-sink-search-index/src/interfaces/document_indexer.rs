//! Document indexer trait definition.
//!
//! This module defines the abstract interface for writing single documents
//! into a search backend, allowing for different implementations
//! (OpenSearch, Elasticsearch, in-memory mocks).

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::types::{IndexRequest, IndexResponse};

/// Abstract interface for single-document index writes.
///
/// # Thread Safety
///
/// Implementations are shared between tasks behind an `Arc` and must be
/// `Send + Sync`.
///
/// # Error Handling
///
/// `Err` means no usable response was obtained. A response carrying an
/// error status is returned as `Ok(IndexResponse)` so the caller can decide
/// how to report it.
#[async_trait]
pub trait DocumentIndexer: Send + Sync {
    /// Write one document.
    ///
    /// # Arguments
    ///
    /// * `request` - Target index, document ID, body and refresh flag
    ///
    /// # Returns
    ///
    /// * `Ok(IndexResponse)` - The backend answered; the body is fully read
    /// * `Err(SearchIndexError)` - The request could not be sent or the
    ///   response could not be read
    async fn index_document(&self, request: &IndexRequest) -> Result<IndexResponse, SearchIndexError>;

    /// Check if the search backend is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the backend answered with a success status
    /// * `Ok(false)` - If the backend answered with an error status
    /// * `Err(SearchIndexError)` - If the check could not be executed
    async fn health_check(&self) -> Result<bool, SearchIndexError>;
}
