//! The event logger facade.

use crate::{
    Backend, Clock, ConfigError, EventRecord, FileMeta, LogDocument, LogRef, LoggerConfig,
    StorageError, SystemClock, locks,
};
use std::sync::{Arc, Mutex};

/// Records structured events into one identifier's JSON log file.
///
/// Construction validates the configuration once; every recording call then
/// runs the same sequence: resolve the file name, make sure the file exists,
/// load the current document from the backend, append the event's parts, and
/// write the document back. One backend read and one backend write per call,
/// never batched.
///
/// The read-modify-write is guarded by a process-wide per-identifier lock, so
/// loggers in the same process cannot lose each other's appends. Writers in
/// *other* processes can still race this one; the last write wins. Backends
/// with stronger append or compare-and-swap primitives are the remedy when
/// that matters.
pub struct EventLogger {
    config: LoggerConfig,
    backend: Arc<dyn Backend>,
    clock: Box<dyn Clock>,
    lock: Arc<Mutex<()>>,
    events: Vec<EventRecord>,
}

impl EventLogger {
    /// Build a logger for `identifier` writing through `backend`.
    ///
    /// Fails with [`ConfigError`] when the identifier is empty or the file
    /// meta is incomplete; the configuration is immutable afterwards.
    pub fn new(
        identifier: impl Into<String>,
        backend: Arc<dyn Backend>,
        file_meta: FileMeta,
    ) -> Result<Self, ConfigError> {
        let config = LoggerConfig::new(identifier, file_meta)?;
        let lock = locks::for_identifier(config.identifier());
        Ok(Self {
            config,
            backend,
            clock: Box::new(SystemClock),
            lock,
            events: Vec::new(),
        })
    }

    /// Replace the time source (useful for testing).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The file name every event from this logger lands in.
    pub fn file_name(&self) -> String {
        self.config.file_name()
    }

    /// Record an event carrying caller metadata and a leveled message.
    pub fn add_event(
        &mut self,
        class: &str,
        function: &str,
        message: &str,
        level: i64,
    ) -> Result<(), StorageError> {
        self.record(EventRecord::new(class, function, message, level))
    }

    /// Record an event that additionally carries exception details.
    pub fn add_event_with_exception(
        &mut self,
        class: &str,
        function: &str,
        message: &str,
        level: i64,
        exception: &str,
    ) -> Result<(), StorageError> {
        self.record(EventRecord::new(class, function, message, level).with_exception(exception))
    }

    /// Record an arbitrary [`EventRecord`].
    ///
    /// All present parts are stamped with one freshly minted [`LogRef`] and
    /// appended to their sections. A record with no parts is kept in the
    /// in-memory history but touches no storage.
    ///
    /// The record always lands in [`events`](Self::events) first, so a failed
    /// write still leaves the attempt visible to the caller while the stored
    /// document keeps its pre-call contents.
    pub fn record(&mut self, event: EventRecord) -> Result<(), StorageError> {
        self.events.push(event.clone());
        if event.is_empty() {
            return Ok(());
        }

        let log_ref = LogRef::new();
        let name = self.config.file_name();

        let lock = Arc::clone(&self.lock);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        self.backend.create_if_absent(&name, b"")?;
        let bytes = match self.backend.get(&name) {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };

        let mut doc = LogDocument::load(&bytes);
        if let Some(meta) = &event.meta {
            doc.append_meta(log_ref.clone(), &meta.class, &meta.function, self.clock.now());
        }
        if let Some(message) = &event.message {
            doc.append_message(log_ref.clone(), &message.text, message.level);
        }
        if let Some(exception) = &event.exception {
            doc.append_exception(log_ref.clone(), &exception.message);
        }

        self.backend.put(&name, &doc.serialize())?;
        tracing::debug!(%log_ref, file = %name, "event recorded");
        Ok(())
    }

    /// Every record built by this logger, in call order, whether or not its
    /// write succeeded. In-memory only; not durable.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use backend::Memory;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn meta() -> FileMeta {
        FileMeta::new("log_event_", ".json")
    }

    fn unique_id(tag: &str) -> String {
        format!("{tag}-{}", Uuid::new_v4())
    }

    fn stored_doc(backend: &Memory, name: &str) -> LogDocument {
        LogDocument::load(&backend.get(name).unwrap())
    }

    #[test]
    fn test_first_event_on_fresh_file() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("fresh");
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();

        log.add_event("Acme.Widget", "render", "started", 0).unwrap();

        let doc = stored_doc(&backend, &log.file_name());
        assert_eq!(doc.meta_data.len(), 1);
        assert_eq!(doc.messages.len(), 1);
        assert!(doc.exceptions.is_empty());
        assert_eq!(doc.meta_data[0].log_ref, doc.messages[0].log_ref);
    }

    #[test]
    fn test_sequential_events_append_in_call_order() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("seq");
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();

        for i in 0..5 {
            log.add_event("Acme.Widget", "render", &format!("call {i}"), i)
                .unwrap();
        }

        let doc = stored_doc(&backend, &log.file_name());
        assert_eq!(doc.meta_data.len(), 5);
        assert_eq!(doc.messages.len(), 5);
        for (i, entry) in doc.messages.iter().enumerate() {
            assert_eq!(entry.message, format!("call {i}"));
            assert_eq!(entry.access_level, i as i64);
        }
        assert_eq!(log.events().len(), 5);
    }

    #[test]
    fn test_identifiers_do_not_share_files() {
        let backend = Arc::new(Memory::new());
        let id_a = unique_id("iso-a");
        let id_b = unique_id("iso-b");
        let mut log_a = EventLogger::new(&id_a, backend.clone(), meta()).unwrap();
        let mut log_b = EventLogger::new(&id_b, backend.clone(), meta()).unwrap();

        log_a.add_event("A", "f", "from a", 0).unwrap();
        log_b.add_event("B", "g", "from b", 0).unwrap();
        log_b.add_event("B", "g", "from b again", 0).unwrap();

        assert_eq!(stored_doc(&backend, &log_a.file_name()).messages.len(), 1);
        assert_eq!(stored_doc(&backend, &log_b.file_name()).messages.len(), 2);
    }

    #[test]
    fn test_exception_path_appends_string_payload() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("exc");
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();

        log.add_event_with_exception("Acme.Widget", "render", "failed", 2, "boom: bad input")
            .unwrap();

        let doc = stored_doc(&backend, &log.file_name());
        assert_eq!(doc.exceptions.len(), 1);
        assert_eq!(doc.exceptions[0].exception_message, "boom: bad input");
        assert_eq!(doc.exceptions[0].log_ref, doc.meta_data[0].log_ref);
    }

    #[test]
    fn test_existing_document_is_never_clobbered_on_open() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("keep");
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();
        log.add_event("A", "f", "first", 0).unwrap();

        // A second logger for the same identifier sees the prior entries.
        let mut later = EventLogger::new(&id, backend.clone(), meta()).unwrap();
        later.add_event("A", "f", "second", 0).unwrap();

        let doc = stored_doc(&backend, &later.file_name());
        assert_eq!(doc.messages.len(), 2);
        assert_eq!(doc.messages[0].message, "first");
    }

    #[test]
    fn test_corrupt_file_recovers_to_fresh_document() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("corrupt");
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();
        backend.put(&log.file_name(), b"{{{ not json").unwrap();

        log.add_event("A", "f", "after corruption", 0).unwrap();

        let doc = stored_doc(&backend, &log.file_name());
        assert_eq!(doc.messages.len(), 1);
        assert_eq!(doc.messages[0].message, "after corruption");
    }

    #[test]
    fn test_empty_record_touches_no_storage() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("empty");
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();

        log.record(EventRecord::default()).unwrap();

        assert_eq!(log.events().len(), 1);
        assert!(!backend.exists(&log.file_name()).unwrap());
    }

    #[test]
    fn test_failed_put_keeps_history_and_prior_contents() {
        struct ReadOnly(Memory);
        impl Backend for ReadOnly {
            fn get(&self, name: &str) -> backend::Result<Vec<u8>> {
                self.0.get(name)
            }
            fn put(&self, _name: &str, _bytes: &[u8]) -> backend::Result<()> {
                Err(StorageError::Io(std::io::Error::other("disk full")))
            }
            fn create_if_absent(&self, _name: &str, _bytes: &[u8]) -> backend::Result<bool> {
                Ok(false)
            }
            fn exists(&self, name: &str) -> backend::Result<bool> {
                self.0.exists(name)
            }
        }

        let id = unique_id("rofail");
        let inner = Memory::new();
        let seeded = {
            let mut doc = LogDocument::default();
            doc.append_message(LogRef::new(), "already here", 0);
            doc.serialize()
        };
        let name = format!("log_event_{id}.json");
        inner.put(&name, &seeded).unwrap();

        let backend = Arc::new(ReadOnly(inner));
        let mut log = EventLogger::new(&id, backend.clone(), meta()).unwrap();
        assert!(log.add_event("A", "f", "lost", 0).is_err());

        // The attempt is visible in history, the stored bytes are untouched.
        assert_eq!(log.events().len(), 1);
        assert_eq!(backend.get(&name).unwrap(), seeded);
    }

    #[test]
    fn test_concurrent_loggers_do_not_lose_updates() {
        let backend = Arc::new(Memory::new());
        let id = unique_id("race");
        let file_name = {
            let log = EventLogger::new(&id, backend.clone(), meta()).unwrap();
            log.file_name()
        };

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let backend = backend.clone();
                let id = id.clone();
                std::thread::spawn(move || {
                    let mut log = EventLogger::new(&id, backend, meta()).unwrap();
                    for i in 0..25 {
                        log.add_event("T", "run", &format!("{t}:{i}"), 0).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let doc = stored_doc(&backend, &file_name);
        assert_eq!(doc.messages.len(), 100);
        assert_eq!(doc.meta_data.len(), 100);
    }

    #[test]
    fn test_concrete_scenario_abc123() {
        let backend = Arc::new(Memory::new());
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap());
        let mut log = EventLogger::new("abc123", backend.clone(), meta())
            .unwrap()
            .with_clock(clock);

        log.add_event(
            "Tests.Feature.Suite",
            "test_add_event",
            "Creating a test event log.",
            0,
        )
        .unwrap();

        assert!(backend.exists("log_event_abc123.json").unwrap());
        let doc = stored_doc(&backend, "log_event_abc123.json");

        assert_eq!(doc.meta_data.len(), 1);
        let meta = &doc.meta_data[0];
        assert_eq!(meta.class_full, "Tests.Feature.Suite");
        assert_eq!(meta.class, "Suite");
        assert_eq!(meta.function, "test_add_event");
        assert_eq!(meta.date_time, "2024-05-17 09:30:00");

        assert_eq!(doc.messages.len(), 1);
        let message = &doc.messages[0];
        assert_eq!(message.message, "Creating a test event log.");
        assert_eq!(message.access_level, 0);
        assert_eq!(message.log_ref, meta.log_ref);

        assert!(doc.exceptions.is_empty());
    }
}
