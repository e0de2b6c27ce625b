//! Pluggable byte storage for eventlog files.
//!
//! This crate defines the durability seam the logger writes through. A
//! [`Backend`] is a flat, name-addressed byte store: no directories beyond
//! what a name encodes, no metadata, no querying. Anything that can hold
//! named blobs can implement it — local disk, object storage, or an
//! in-memory map.
//!
//! # Core Concepts
//!
//! ## Backend
//!
//! The [`Backend`] trait is the whole contract: `get`, `put`, `exists`, and
//! `create_if_absent`. The conditional create matters — it is what lets the
//! logger guarantee a log file exists without ever clobbering one that
//! already holds entries.
//!
//! ## Implementations
//!
//! - [`LocalDisk`] — files under a root directory.
//! - [`Memory`] — a mutexed map, useful for testing.
//!
//! # Example
//!
//! ```no_run
//! use backend::{Backend, LocalDisk};
//!
//! let disk = LocalDisk::open("system_event_logs")?;
//! disk.create_if_absent("log_event_abc123.json", b"")?;
//! disk.put("log_event_abc123.json", b"{}")?;
//! let bytes = disk.get("log_event_abc123.json")?;
//! # Ok::<(), backend::StorageError>(())
//! ```

mod disk;
mod error;
mod memory;

pub use disk::LocalDisk;
pub use error::{Result, StorageError};
pub use memory::Memory;

/// A name-addressed durable byte store.
///
/// Implementations must be safe to share behind an `Arc` across loggers.
pub trait Backend: Send + Sync {
    /// Read the full contents stored under `name`.
    ///
    /// Returns [`StorageError::NotFound`] when nothing is stored under
    /// `name`; callers that treat a missing file as empty match on that
    /// variant.
    fn get(&self, name: &str) -> Result<Vec<u8>>;

    /// Unconditionally write `bytes` under `name`, replacing any previous
    /// contents.
    fn put(&self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Write `bytes` under `name` only if nothing is stored there yet.
    ///
    /// Returns `true` when the entry was created, `false` when it already
    /// existed. Existing contents are never touched.
    fn create_if_absent(&self, name: &str, bytes: &[u8]) -> Result<bool>;

    /// Whether anything is stored under `name`.
    fn exists(&self, name: &str) -> Result<bool>;
}
