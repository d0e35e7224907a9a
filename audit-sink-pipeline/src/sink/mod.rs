//! Sink module for the audit sink pipeline.
//!
//! Delivers formatted events to the search index.

mod opensearch_sink;

pub use opensearch_sink::{OpenSearchSink, SinkConfig, DEFAULT_INDEX_NAME};
