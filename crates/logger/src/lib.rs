//! Per-identifier JSON event logging.
//!
//! This crate is the core of eventlog: callers record discrete events —
//! caller metadata, free-text messages with a severity level, and optional
//! exception details — and each event is appended to a durable JSON log file,
//! one file per identifier, through a pluggable [`backend::Backend`].
//!
//! # Overview
//!
//! The moving parts, leaf first:
//!
//! 1. **Document** — [`LogDocument`] is the in-memory form of one log file:
//!    three append-only arrays (`meta_data`, `messages`, `exceptions`).
//!    Loading tolerates empty or corrupt files by recovering to the empty
//!    document, so a damaged log never blocks new events.
//!
//! 2. **References** — every `add_event` call mints one [`LogRef`], shared by
//!    all entries it writes. That is what ties a meta row, a message row, and
//!    an exception row back to a single logical event.
//!
//! 3. **Facade** — [`EventLogger`] composes the rest: validate config once at
//!    construction, then per call resolve the file name, load the current
//!    document from the backend, append, and write it back.
//!
//! # Core Concepts
//!
//! ## EventLogger
//!
//! An [`EventLogger`] is bound to one identifier and one backend handle at
//! construction; construction fails with [`ConfigError`] on an empty
//! identifier or incomplete [`FileMeta`]. The logger also keeps an in-memory
//! history of every [`EventRecord`] it built, regardless of whether
//! persistence succeeded — useful for introspection and testing, not durable.
//!
//! ## Concurrency
//!
//! Each call is a read-modify-write on the shared file. Within one process a
//! per-identifier lock serializes writers, so two loggers targeting the same
//! identifier cannot lose each other's entries. Across processes no such
//! guarantee exists — the last `put` wins. Callers needing cross-process
//! coordination must layer it on top of the backend.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use backend::LocalDisk;
//! use logger::{EventLogger, FileMeta};
//!
//! let disk = Arc::new(LocalDisk::open("system_event_logs")?);
//! let mut log = EventLogger::new("abc123", disk, FileMeta::new("log_event_", ".json"))?;
//!
//! log.add_event("Acme.Billing.Invoicer", "send_invoice", "Invoice queued.", 0)?;
//! log.add_event_with_exception(
//!     "Acme.Billing.Invoicer",
//!     "send_invoice",
//!     "Invoice rejected by upstream.",
//!     2,
//!     "UpstreamError: duplicate invoice number",
//! )?;
//!
//! assert_eq!(log.events().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod clock;
mod config;
mod document;
mod event;
mod locks;
mod logger;

pub use backend::{Backend, StorageError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, FileMeta, LoggerConfig};
pub use document::{ExceptionEntry, LogDocument, MessageEntry, MetaEntry, short_name};
pub use event::{EventRecord, ExceptionPart, LogRef, MessagePart, MetaPart};
pub use logger::EventLogger;
