//! File-backed storage implementation.

use crate::error::StoreError;
use crate::traits::RecordStore;
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Options for the file-backed store.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Whether to create the data directory if it doesn't exist
    /// (default: true).
    pub create: bool,
    /// Whether to fsync after each save (default: false).
    pub sync: bool,
    /// Maximum serialized size in bytes per entry (default: unlimited).
    pub quota: Option<u64>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            create: true,
            sync: false,
            quota: None,
        }
    }
}

/// Key-value store keeping one JSON file per key under a data directory.
///
/// Saves are atomic: the value is written to a sibling temp file, flushed
/// (and optionally fsynced), then renamed over the target, so a reader
/// never observes a partial write and a failed save leaves the previous
/// entry intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    options: StoreOptions,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if
    /// `options.create` is set.
    pub fn open<P: AsRef<Path>>(dir: P, options: StoreOptions) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        if options.create {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir, options })
    }

    /// Path of the entry file for `key`.
    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Keys are restricted to `[A-Za-z0-9_-]` so they map directly to file
/// names without traversal.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Maps OS-level out-of-space conditions to `StorageFull` so callers see
/// one condition whether the ceiling is the configured quota or the
/// filesystem.
fn map_write_error(key: &str, err: io::Error) -> StoreError {
    match err.kind() {
        io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded => StoreError::StorageFull {
            key: key.to_string(),
        },
        _ => StoreError::Io(err),
    }
}

impl RecordStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.entry_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // Corrupt entries load as absent, not as errors.
        Ok(serde_json::from_slice(&bytes).ok())
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        let bytes = serde_json::to_vec(value)?;

        if let Some(quota) = self.options.quota {
            if bytes.len() as u64 > quota {
                return Err(StoreError::StorageFull {
                    key: key.to_string(),
                });
            }
        }

        let tmp_path = self.dir.join(format!("{}.json.tmp", key));
        let result = write_entry(&tmp_path, &bytes, self.options.sync)
            .and_then(|_| fs::rename(&tmp_path, &path));
        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                // Leave the previous entry intact; only the temp file is
                // discarded.
                let _ = fs::remove_file(&tmp_path);
                Err(map_write_error(key, e))
            }
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_entry(path: &Path, bytes: &[u8], sync: bool) -> io::Result<()> {
    let mut file: File = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    if sync {
        file.sync_all()?;
    }
    Ok(())
}
