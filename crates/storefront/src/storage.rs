//! Durable key-value slots.
//!
//! A slot is a single named value that is read whole and replaced whole.
//! The wishlist uses one slot; nothing here merges concurrent writers, so the
//! last full write wins.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

/// Slot storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),
    #[error("failed to encode slot value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("slot store lock poisoned")]
    Poisoned,
}

/// A local persistent key-value store addressed by slot name.
pub trait SlotStore {
    /// Read the whole value of `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the value cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the whole value of `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Slots stored as `<dir>/<key>.json` files.
///
/// Writes go to a temporary sibling which is then renamed over the target,
/// so a reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Use `dir` for slot files. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(io_error(&path, source)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| io_error(&self.dir, source))?;

        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        if let Err(e) = replace_via(&tmp, &path, value) {
            discard(&tmp);
            return Err(e);
        }

        tracing::trace!(key, bytes = value.len(), "Slot written");
        Ok(())
    }
}

/// Write `value` to `tmp`, then rename it over `path`.
fn replace_via(tmp: &Path, path: &Path, value: &str) -> Result<(), StorageError> {
    let mut file = fs::File::create(tmp).map_err(|source| io_error(tmp, source))?;
    file.write_all(value.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|source| io_error(tmp, source))?;
    drop(file);
    fs::rename(tmp, path).map_err(|source| io_error(path, source))
}

fn discard(tmp: &Path) {
    match fs::remove_file(tmp) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::debug!(path = %tmp.display(), error = %e, "Could not remove temporary slot file"),
    }
}

/// In-process slots, used when persistence is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one pre-populated slot.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let slots = HashMap::from([(key.to_owned(), value.to_owned())]);
        Self {
            slots: RwLock::new(slots),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let slots = self.slots.read().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut slots = self.slots.write().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Keys become file names, so only a conservative character set is allowed.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
