//! The persisted log document: three append-only JSON arrays.

use crate::LogRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp shape written into `meta_data` entries.
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One entry in the `meta_data` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub log_ref: LogRef,
    pub class_full: String,
    pub class: String,
    pub function: String,
    pub date_time: String,
}

/// One entry in the `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub log_ref: LogRef,
    pub message: String,
    pub access_level: i64,
}

/// One entry in the `exceptions` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub log_ref: LogRef,
    pub exception_message: String,
}

/// The JSON document persisted per identifier.
///
/// All three sections are insertion-ordered and append-only. A freshly
/// created, empty, or unreadable file loads as the empty document — three
/// empty arrays, never absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDocument {
    #[serde(default)]
    pub meta_data: Vec<MetaEntry>,
    #[serde(default)]
    pub messages: Vec<MessageEntry>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionEntry>,
}

impl LogDocument {
    /// Parse stored bytes into a document.
    ///
    /// Empty input is a fresh file; malformed input is a damaged one. Both
    /// recover to the empty document rather than failing, so a corrupt log
    /// never blocks new events from being recorded.
    pub fn load(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }
        match serde_json::from_slice(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "malformed log document, starting fresh");
                Self::default()
            }
        }
    }

    /// Append a `meta_data` entry stamped with the given instant.
    pub fn append_meta(
        &mut self,
        log_ref: LogRef,
        class: impl Into<String>,
        function: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        let class_full = class.into();
        let class = short_name(&class_full).to_string();
        self.meta_data.push(MetaEntry {
            log_ref,
            class_full,
            class,
            function: function.into(),
            date_time: now.format(DATE_TIME_FORMAT).to_string(),
        });
    }

    /// Append a `messages` entry.
    pub fn append_message(&mut self, log_ref: LogRef, message: impl Into<String>, level: i64) {
        self.messages.push(MessageEntry {
            log_ref,
            message: message.into(),
            access_level: level,
        });
    }

    /// Append an `exceptions` entry. The payload is a message string.
    pub fn append_exception(&mut self, log_ref: LogRef, message: impl Into<String>) {
        self.exceptions.push(ExceptionEntry {
            log_ref,
            exception_message: message.into(),
        });
    }

    /// Encode the document as JSON, sections in fixed order.
    pub fn serialize(&self) -> Vec<u8> {
        // Serializing Vec-only struct fields cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.meta_data.is_empty() && self.messages.is_empty() && self.exceptions.is_empty()
    }
}

/// The trailing component of a qualified class name.
///
/// The class field is treated as an opaque qualified string; the short form
/// is derived by splitting on qualifier separators (`.`, `::`, `\`), no
/// runtime reflection involved. `::` is matched as a whole token, so a
/// literal single colon does not split. A name ending in a separator yields
/// the empty string.
pub fn short_name(class: &str) -> &str {
    let tail = class.rsplit("::").next().unwrap_or(class);
    tail.rsplit(['.', '\\']).next().unwrap_or(tail)
}
