//! # Persistence
//!
//! Receives the serialized document after every successful mutation.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Sink for the serialized document
pub trait Persister: Send + Sync + fmt::Debug {
    /// Store the full document, replacing whatever was stored before
    fn persist(&self, bytes: &[u8]) -> io::Result<()>;
}

/// Overwrites a single file on every change
#[derive(Debug, Clone)]
pub struct FilePersister {
    path: PathBuf,
}

impl FilePersister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persister for FilePersister {
    fn persist(&self, bytes: &[u8]) -> io::Result<()> {
        fs::write(&self.path, bytes)
    }
}

/// Keeps every write in memory, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryPersister {
    writes: Mutex<Vec<Vec<u8>>>,
}

impl MemoryPersister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes received so far
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }

    /// Most recent write, if any
    pub fn last(&self) -> Option<Vec<u8>> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }
}

impl Persister for MemoryPersister {
    fn persist(&self, bytes: &[u8]) -> io::Result<()> {
        self.writes
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?
            .push(bytes.to_vec());
        Ok(())
    }
}
