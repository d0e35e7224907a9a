//! # Audit Sink Pipeline
//!
//! Pipeline nodes that turn audit events into OpenSearch documents.
//!
//! ## Architecture
//!
//! Every event passes through a chain of [`Node`]s:
//!
//! 1. **Formatter**: renders the event as a JSON document and stores it on
//!    the event under the `"json"` format
//! 2. **Sink**: writes the stored document to an index under an ID derived
//!    from its content, then ends processing for the event
//! 3. **Orchestrator**: runs the chain for one event at a time

pub mod errors;
pub mod formatter;
pub mod node;
pub mod orchestrator;
pub mod sink;

pub use errors::PipelineError;
pub use formatter::{OpenSearchDocument, OpenSearchFormatter, OPENSEARCH_FORMAT};
pub use node::Node;
pub use orchestrator::Orchestrator;
pub use sink::{OpenSearchSink, SinkConfig};
