//! # Storage Layer
//!
//! Two cooperating stores sit on top of a raw I/O backend:
//!
//! - [`doc_store::DocStore`]: the live document set. Every mutating
//!   operation (create, update, delete, rename, duplicate) also updates the
//!   document's history, so the two never drift apart.
//! - [`history::HistoryStore`]: the per-document history directories and the
//!   version-numbered entries inside them.
//!
//! ## Storage Layout
//!
//! ```text
//! <data>/
//! ├── documents/
//! │   ├── notes.txt          # current content
//! │   └── about.md
//! └── history/
//!     ├── notes.txt/
//!     │   ├── 1_notes.txt    # content before the 1st update
//!     │   └── 2_notes.txt    # content before the 2nd update
//!     └── about.md/          # created empty with the document
//! ```
//!
//! ## Invariants
//!
//! - Every live document has a history directory, possibly empty.
//! - No history directory outlives its document.
//! - An entry holds the content a document had *before* the update that
//!   created it and is never rewritten afterwards (only renamed or copied
//!   along with its document).
//!
//! [`doc_store::DocStore::doctor`] restores the first two after external
//! tampering.
//!
//! ## Backends
//!
//! - [`fs_backend::FsBackend`]: production, plain files and directories.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O,
//!   with switches to inject write failures.

pub mod backend;
pub mod doc_store;
pub mod fs_backend;
pub mod history;
pub mod mem_backend;

use doc_store::DocStore;
use fs_backend::FsBackend;

/// Production store: documents and history as plain files.
pub type FileStore = DocStore<FsBackend>;

/// Report from the `doctor` operation.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DoctorReport {
    pub created_history_dirs: usize,
    pub removed_orphan_histories: usize,
    pub malformed_entries: Vec<String>,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.created_history_dirs == 0
            && self.removed_orphan_histories == 0
            && self.malformed_entries.is_empty()
    }
}

impl FileStore {
    pub fn new_fs(documents_root: std::path::PathBuf, history_root: std::path::PathBuf) -> Self {
        DocStore::with_backend(FsBackend::new(documents_root, history_root))
    }
}
