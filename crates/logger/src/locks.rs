//! Process-wide per-identifier write locks.
//!
//! Each `add_event` call is a read-modify-write over the shared log file.
//! Holding the identifier's lock from before the read until after the write
//! keeps two in-process loggers targeting the same identifier from clobbering
//! each other's appends. Cross-process writers are not covered.
//!
//! The registry is never pruned: each distinct identifier leaves its lock in
//! the map for the rest of the process, one `Arc<Mutex<()>>` per identifier.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Mutex<()>>>>> = OnceLock::new();

/// The lock guarding all writers for `identifier` in this process.
pub(crate) fn for_identifier(identifier: &str) -> Arc<Mutex<()>> {
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = registry.lock().unwrap();
    map.entry(identifier.to_string())
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identifier_shares_one_lock() {
        let a = for_identifier("shared-lock-id");
        let b = for_identifier("shared-lock-id");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_identifiers_get_distinct_locks() {
        let a = for_identifier("lock-id-a");
        let b = for_identifier("lock-id-b");
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
