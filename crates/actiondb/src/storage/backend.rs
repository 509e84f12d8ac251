//! Backing stores for database snapshots

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Where serialized snapshots are read from and written to
pub trait SnapshotStore {
    /// Read the stored snapshot
    ///
    /// Returns None if nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot
    fn write(&self, contents: &str) -> Result<()>;

    /// Human-readable location, used in log and error messages
    fn location(&self) -> String;
}

/// Snapshot kept in a single file
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, contents: &str) -> Result<()> {
        // Write atomically (write to temp, then rename)
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Snapshot kept in memory, for tests and ephemeral sessions
#[derive(Default)]
pub struct MemorySnapshotStore {
    contents: RwLock<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self) -> Result<Option<String>> {
        let contents = self
            .contents
            .read()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        Ok(contents.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut guard = self
            .contents
            .write()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        *guard = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<()> {
        (**self).write(contents)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
