use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::history::HistoryStore`] and [`super::doc_store::DocStore`] handle
/// the "what" (version numbering, coordinated history bookkeeping).
///
/// Document primitives report failures as [`crate::error::QuireError::Io`];
/// history primitives report them as [`crate::error::QuireError::HistoryIo`].
pub trait StorageBackend {
    // --- Documents ---

    /// Read a document's content. `Ok(None)` if it does not exist.
    fn read_document(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Write a document's content, creating or replacing it.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_document(&self, name: &str, content: &[u8]) -> Result<()>;

    /// Remove a document. Removing a missing document is not an error.
    fn remove_document(&self, name: &str) -> Result<()>;

    /// Move a document's content from `from` to `to`.
    fn move_document(&self, from: &str, to: &str) -> Result<()>;

    /// Names of all documents, in no particular order.
    fn list_documents(&self) -> Result<Vec<String>>;

    fn document_modified(&self, name: &str) -> Result<Option<DateTime<Utc>>>;

    // --- History directories ---

    fn history_exists(&self, name: &str) -> Result<bool>;

    /// Create the history directory for `name`. Succeeds if it already exists.
    fn create_history_dir(&self, name: &str) -> Result<()>;

    /// Remove the history directory for `name` and everything in it.
    /// Succeeds if it does not exist.
    fn remove_history_dir(&self, name: &str) -> Result<()>;

    /// Names of all history directories, in no particular order.
    fn list_history_dirs(&self) -> Result<Vec<String>>;

    // --- History entry files ---

    /// File names inside `name`'s history directory, in no particular order.
    /// Fails with `HistoryUnavailable` if the directory does not exist.
    fn list_history_files(&self, name: &str) -> Result<Vec<String>>;

    fn read_history_file(&self, name: &str, file: &str) -> Result<Vec<u8>>;

    /// Write one entry file. MUST be atomic, like `write_document`.
    fn write_history_file(&self, name: &str, file: &str, content: &[u8]) -> Result<()>;

    fn remove_history_file(&self, name: &str, file: &str) -> Result<()>;

    fn history_file_modified(&self, name: &str, file: &str) -> Result<Option<DateTime<Utc>>>;

    // --- Paths ---

    /// Location of a document's content. For `FsBackend` this is the real
    /// path; for `MemBackend` a virtual one.
    fn document_path(&self, name: &str) -> PathBuf;

    fn history_path(&self, name: &str) -> PathBuf;
}
