//! Persistence for the contact book.
//!
//! The book is snapshotted as a JSON document mapping contact names to
//! records. The trait keeps the storage backend swappable; the shipped
//! implementation writes a file on the local filesystem.

use crate::error::{StorageError, StorageResult};
use crate::models::ContactBook;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Storage abstraction for address book snapshots.
///
/// A snapshot must round-trip every field value and the phone-list order.
pub trait BookStore {
    /// Serialize the full book to the durable sink.
    fn save(&self, book: &ContactBook) -> StorageResult<()>;

    /// Deserialize a previously saved book.
    ///
    /// A missing source yields `StorageError::NotFound`, which callers
    /// treat as "start empty" rather than a failure.
    fn load(&self) -> StorageResult<ContactBook>;
}

/// File-backed store keeping the snapshot as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn save(&self, book: &ContactBook) -> StorageResult<()> {
        // The handle is scoped to this function and closed on every exit
        // path, including serialization failure.
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, book)?;
        writer.flush()?;
        Ok(())
    }

    fn load(&self) -> StorageResult<ContactBook> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(self.path.display().to_string())
            } else {
                StorageError::Io(e)
            }
        })?;
        let reader = BufReader::new(file);
        let book = serde_json::from_reader(reader)?;
        Ok(book)
    }
}
