//! The event record that flows through the pipeline.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::types::EventType;

/// An event payload that can be rendered as generic JSON.
///
/// Implemented for every `Serialize` type, so callers can attach their own
/// structs, maps or a plain [`serde_json::Value`] without converting first.
/// Conversion is deferred to the formatter so that serialization failures
/// surface as a formatting error for that one event.
pub trait Payload: fmt::Debug + Send + Sync {
    /// Encode the payload as JSON bytes.
    fn marshal(&self) -> Result<Vec<u8>, serde_json::Error>;

    /// Render the payload as a generic JSON value by decoding its encoded
    /// form. Custom types come back as plain maps, arrays and scalars.
    fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.marshal()?)
    }
}

impl<T> Payload for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn marshal(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// One structured record flowing through the logging pipeline.
///
/// Nodes never change the payload, type or timestamp. They only read and
/// append to the per-format renderings.
#[derive(Debug)]
pub struct Event {
    created_at: DateTime<Utc>,
    event_type: EventType,
    payload: Box<dyn Payload>,
    formatted: HashMap<String, Vec<u8>>,
}

impl Event {
    /// Create a new event stamped with the current time.
    pub fn new(event_type: impl Into<EventType>, payload: impl Payload + 'static) -> Self {
        Self {
            created_at: Utc::now(),
            event_type: event_type.into(),
            payload: Box::new(payload),
            formatted: HashMap::new(),
        }
    }

    /// Override the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    pub fn payload(&self) -> &dyn Payload {
        self.payload.as_ref()
    }

    /// Get the bytes previously rendered under `format`, if any.
    pub fn format(&self, format: &str) -> Option<&[u8]> {
        self.formatted.get(format).map(Vec::as_slice)
    }

    /// Store a rendering of this event under `format`, replacing any
    /// previous rendering with the same name.
    pub fn formatted_as(&mut self, format: impl Into<String>, bytes: Vec<u8>) {
        self.formatted.insert(format.into(), bytes);
    }
}
