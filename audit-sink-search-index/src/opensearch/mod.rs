//! OpenSearch implementation of the document indexer.

mod client;

pub use client::OpenSearchClient;
