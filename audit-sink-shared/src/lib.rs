//! # Audit Sink Shared
//!
//! Types shared by every stage of the audit sink: the [`Event`] that flows
//! through the pipeline, its [`EventType`] tag, and the [`NodeType`] each
//! pipeline stage reports.

mod event;
mod types;

pub use event::{Event, Payload};
pub use types::{EventType, NodeType, JSON_FORMAT};
