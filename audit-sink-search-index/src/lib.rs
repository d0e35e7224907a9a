//! # Audit Sink Search Index
//!
//! This crate provides the trait the sink writes documents through, the
//! request and response types for a single index write, and a concrete
//! implementation backed by OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use config::SearchIndexConfig;
pub use errors::SearchIndexError;
pub use interfaces::DocumentIndexer;
pub use crate::opensearch::OpenSearchClient;
pub use types::{IndexRequest, IndexResponse, StatusCode};
