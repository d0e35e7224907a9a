//! Small value types used across the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format name under which JSON renderings of an event are stored.
pub const JSON_FORMAT: &str = "json";

/// Tag describing what kind of event a record is (e.g. `"login"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    /// Create a new event type tag.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The role a node plays in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Decides whether an event continues down the pipeline.
    Filter,
    /// Renders an event into one or more stored formats.
    Formatter,
    /// Terminal node that delivers an event to external storage.
    Sink,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Filter => "filter",
            NodeType::Formatter => "formatter",
            NodeType::Sink => "sink",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_serializes_as_plain_string() {
        let event_type = EventType::from("login");
        assert_eq!(serde_json::to_string(&event_type).unwrap(), "\"login\"");
        assert_eq!(event_type.to_string(), "login");
    }

    #[test]
    fn test_node_type_display() {
        assert_eq!(NodeType::Formatter.to_string(), "formatter");
        assert_eq!(NodeType::Sink.to_string(), "sink");
    }
}
