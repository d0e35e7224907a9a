//! Interface definitions for the search index client.
//!
//! The sink depends on `DocumentIndexer` rather than on OpenSearch directly,
//! so the backend can be swapped or mocked in tests.

mod document_indexer;

pub use document_indexer::DocumentIndexer;
