// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value storage backends for the session.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;

use crate::error::{Error, Result};

const SESSION_FILE_NAME: &str = "session.json";
const LOCK_FILE_NAME: &str = "session.lock";

/// String key-value storage.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Storage backed by `session.json` in a state directory.
///
/// Every mutation re-reads the file and rewrites it while holding an
/// exclusive lock on `session.lock`, so concurrent `agv` processes do not
/// lose each other's writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Path of the session file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::Storage(format!("corrupt session file {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn lock(&self) -> Result<File> {
        create_private_dir(&self.dir)?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.dir.join(LOCK_FILE_NAME))?;
        file.lock_exclusive()
            .map_err(|e| Error::Storage(format!("failed to lock session: {}", e)))?;
        Ok(file)
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let lock = self.lock()?;
        let path = self.path();
        let mut entries = Self::read_entries(&path)?;
        f(&mut entries);

        let tmp = self.dir.join(format!("{}.tmp", SESSION_FILE_NAME));
        write_private(&tmp, serde_json::to_string_pretty(&entries)?.as_bytes())?;
        fs::rename(&tmp, &path)?;

        FileExt::unlock(&lock)
            .map_err(|e| Error::Storage(format!("failed to unlock session: {}", e)))?;
        Ok(())
    }
}

/// Creates `dir` (and parents), readable by the owner only on unix.
fn create_private_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)?;
    Ok(())
}

/// Writes `contents` to a fresh file at `path`. The session holds the bearer
/// token, so on unix the file is created with mode 0600.
fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    use std::io::Write;

    // A stale tmp file would keep its old mode
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
        _ => {}
    }
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(Self::read_entries(&self.path())?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path().exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Storage("memory storage poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
