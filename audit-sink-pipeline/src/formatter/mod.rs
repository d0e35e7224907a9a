//! Formatter module for the audit sink pipeline.
//!
//! Renders events into the document shape stored in OpenSearch.

mod encoder;
mod opensearch_formatter;

pub use opensearch_formatter::{OpenSearchDocument, OpenSearchFormatter, OPENSEARCH_FORMAT};
