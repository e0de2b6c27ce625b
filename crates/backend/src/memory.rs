//! In-memory storage, useful for testing.

use crate::{Backend, Result, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;

/// A [`Backend`] backed by a mutexed map. Contents are lost on drop.
#[derive(Default)]
pub struct Memory {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for Memory {
    fn get(&self, name: &str) -> Result<Vec<u8>> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn put(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn create_if_absent(&self, name: &str, bytes: &[u8]) -> Result<bool> {
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(name) {
            return Ok(false);
        }
        entries.insert(name.to_string(), bytes.to_vec());
        Ok(true)
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.entries.lock().unwrap().contains_key(name))
    }
}
