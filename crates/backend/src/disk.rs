//! Filesystem-backed storage.

use crate::{Backend, Result, StorageError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A [`Backend`] that stores each name as a file under a root directory.
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    /// Open a disk backend rooted at `root`, creating the directory if it
    /// does not exist yet.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The absolute-or-relative path a name resolves to under this root.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Backend for LocalDisk {
    fn get(&self, name: &str) -> Result<Vec<u8>> {
        match fs::read(self.path_of(name)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.path_of(name), bytes)?;
        Ok(())
    }

    fn create_if_absent(&self, name: &str, bytes: &[u8]) -> Result<bool> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path_of(name))
        {
            Ok(mut file) => {
                file.write_all(bytes)?;
                tracing::debug!(name, "created log file");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_of(name).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_root() -> PathBuf {
        std::env::temp_dir().join(format!("eventlog-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let disk = LocalDisk::open(scratch_root()).unwrap();
        assert!(matches!(
            disk.get("nope.json"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let disk = LocalDisk::open(scratch_root()).unwrap();
        disk.put("a.json", b"{}").unwrap();
        assert_eq!(disk.get("a.json").unwrap(), b"{}");
        assert!(disk.exists("a.json").unwrap());
    }

    #[test]
    fn test_create_if_absent_never_clobbers() {
        let disk = LocalDisk::open(scratch_root()).unwrap();
        assert!(disk.create_if_absent("log.json", b"original").unwrap());
        assert!(!disk.create_if_absent("log.json", b"").unwrap());
        assert_eq!(disk.get("log.json").unwrap(), b"original");
    }
}
