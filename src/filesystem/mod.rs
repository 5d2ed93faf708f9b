//! Persistence for the menu's data structures
//!
//! Every structure lives in a named resource holding plain text. The machine
//! only ever sees the [`Storage`] trait; [`FileStorage`] backs it with real
//! files and [`MemoryStorage`] keeps everything in a map for tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Read/write access to named text resources
pub trait Storage {
    /// Read the full contents of `name`. A resource that does not exist reads
    /// as an empty string.
    fn read(&mut self, name: &str) -> Result<String>;

    /// Replace the contents of `name` with `data`
    fn write(&mut self, name: &str, data: &str) -> Result<()>;
}

/// Files inside a single data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Store resources under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FileStorage {
    /// Bytes that are not valid UTF-8 are replaced rather than rejected so
    /// the readable elements of a damaged file are kept.
    fn read(&mut self, name: &str) -> Result<String> {
        match fs::read(self.path_for(name)) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(StorageError::Read {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, name: &str, data: &str) -> Result<()> {
        fs::write(self.path_for(name), data).map_err(|source| StorageError::Write {
            name: name.to_string(),
            source,
        })
    }
}

/// In-memory resources, used to drive the machine in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    resources: HashMap<String, String>,
    reads: usize,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a resource before the machine starts
    pub fn with_resource(mut self, name: &str, data: &str) -> Self {
        self.resources.insert(name.to_string(), data.to_string());
        self
    }

    /// Make every subsequent read fail
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent write fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Current contents of a resource, if it was ever written or seeded
    pub fn get(&self, name: &str) -> Option<&str> {
        self.resources.get(name).map(String::as_str)
    }

    /// Number of read calls so far, failed ones included
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of write calls so far, failed ones included
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn read(&mut self, name: &str) -> Result<String> {
        self.reads += 1;
        if self.fail_reads {
            return Err(StorageError::Unavailable {
                name: name.to_string(),
            });
        }
        Ok(self.resources.get(name).cloned().unwrap_or_default())
    }

    fn write(&mut self, name: &str, data: &str) -> Result<()> {
        self.writes += 1;
        if self.fail_writes {
            return Err(StorageError::Unavailable {
                name: name.to_string(),
            });
        }
        self.resources.insert(name.to_string(), data.to_string());
        Ok(())
    }
}
