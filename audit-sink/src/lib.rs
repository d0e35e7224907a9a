//! # Audit Sink
//!
//! Main library for the audit sink binary.
//!
//! This crate wires the OpenSearch client and the formatter → sink pipeline
//! together from environment configuration, and feeds it events read from
//! newline-delimited JSON input.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::{AppConfig, Dependencies};
pub use runner::{run, IncomingEvent, RunSummary};

use thiserror::Error;

/// Errors that can occur during startup or while reading input.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] audit_sink_pipeline::PipelineError),

    /// Search index error.
    #[error("Search index error: {0}")]
    SearchIndexError(#[from] audit_sink_search_index::SearchIndexError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SinkError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
