//! Event types built per `add_event` call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The correlation token minted once per `add_event` call.
///
/// Every entry an event writes — across `meta_data`, `messages`, and
/// `exceptions` — carries the same reference, so the three parallel arrays
/// can be joined back into logical events.
///
/// References are opaque strings. This process mints UUIDs, but the log file
/// is a durable contract other tools may write too, so loading accepts any
/// string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRef(pub String);

impl LogRef {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LogRef {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LogRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller location: which class and function recorded the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPart {
    pub class: String,
    pub function: String,
}

/// Free-text message with a severity level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePart {
    pub text: String,
    pub level: i64,
}

/// Exception details attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionPart {
    pub message: String,
}

/// One logical event, as built for a single `add_event` call.
///
/// The three parts are independent; whichever are present are all applied to
/// the document. A record with no parts has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub meta: Option<MetaPart>,
    pub message: Option<MessagePart>,
    pub exception: Option<ExceptionPart>,
}

impl EventRecord {
    /// The standard meta + message pairing every `add_event` call produces.
    pub fn new(
        class: impl Into<String>,
        function: impl Into<String>,
        text: impl Into<String>,
        level: i64,
    ) -> Self {
        Self {
            meta: Some(MetaPart {
                class: class.into(),
                function: function.into(),
            }),
            message: Some(MessagePart {
                text: text.into(),
                level,
            }),
            exception: None,
        }
    }

    /// Attach exception details to the record.
    pub fn with_exception(mut self, message: impl Into<String>) -> Self {
        self.exception = Some(ExceptionPart {
            message: message.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.meta.is_none() && self.message.is_none() && self.exception.is_none()
    }
}
