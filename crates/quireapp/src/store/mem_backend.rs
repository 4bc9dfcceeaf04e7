use super::backend::StorageBackend;
use crate::error::{QuireError, Result};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::PathBuf;

#[derive(Clone)]
struct StoredFile {
    bytes: Vec<u8>,
    mtime: DateTime<Utc>,
}

impl StoredFile {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            mtime: Utc::now(),
        }
    }
}

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-writer.
/// Failure switches let tests drive the partial-failure paths of rename,
/// duplicate and delete.
#[derive(Default)]
pub struct MemBackend {
    documents: RefCell<HashMap<String, StoredFile>>,
    history: RefCell<HashMap<String, BTreeMap<String, StoredFile>>>,
    simulate_write_error: Cell<bool>,
    history_writes_left: Cell<Option<usize>>,
    fail_document_moves: Cell<bool>,
    fail_history_removal: Cell<bool>,
}

fn simulated(what: &str) -> io::Error {
    io::Error::other(format!("simulated {} failure", what))
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every document and history write.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Allow `n` more history file writes, then fail the rest.
    pub fn fail_history_writes_after(&self, n: usize) {
        self.history_writes_left.set(Some(n));
    }

    pub fn set_fail_document_moves(&self, fail: bool) {
        self.fail_document_moves.set(fail);
    }

    pub fn set_fail_history_removal(&self, fail: bool) {
        self.fail_history_removal.set(fail);
    }

    /// Clear every failure switch.
    pub fn heal(&self) {
        self.simulate_write_error.set(false);
        self.history_writes_left.set(None);
        self.fail_document_moves.set(false);
        self.fail_history_removal.set(false);
    }

    fn history_write_allowed(&self) -> bool {
        if self.simulate_write_error.get() {
            return false;
        }
        match self.history_writes_left.get() {
            Some(0) => false,
            Some(n) => {
                self.history_writes_left.set(Some(n - 1));
                true
            }
            None => true,
        }
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.documents.borrow().get(name).map(|f| f.bytes.clone()))
    }

    fn write_document(&self, name: &str, content: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuireError::io(self.document_path(name), simulated("write")));
        }
        self.documents
            .borrow_mut()
            .insert(name.to_string(), StoredFile::new(content));
        Ok(())
    }

    fn remove_document(&self, name: &str) -> Result<()> {
        self.documents.borrow_mut().remove(name);
        Ok(())
    }

    fn move_document(&self, from: &str, to: &str) -> Result<()> {
        if self.fail_document_moves.get() {
            return Err(QuireError::io(self.document_path(from), simulated("move")));
        }
        let mut documents = self.documents.borrow_mut();
        let file = documents.remove(from).ok_or_else(|| {
            QuireError::io(self.document_path(from), io::ErrorKind::NotFound.into())
        })?;
        documents.insert(to.to_string(), file);
        Ok(())
    }

    fn list_documents(&self) -> Result<Vec<String>> {
        Ok(self.documents.borrow().keys().cloned().collect())
    }

    fn document_modified(&self, name: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.documents.borrow().get(name).map(|f| f.mtime))
    }

    fn history_exists(&self, name: &str) -> Result<bool> {
        Ok(self.history.borrow().contains_key(name))
    }

    fn create_history_dir(&self, name: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuireError::history_io(self.history_path(name), simulated("mkdir")));
        }
        self.history.borrow_mut().entry(name.to_string()).or_default();
        Ok(())
    }

    fn remove_history_dir(&self, name: &str) -> Result<()> {
        if self.fail_history_removal.get() {
            return Err(QuireError::history_io(self.history_path(name), simulated("rmdir")));
        }
        self.history.borrow_mut().remove(name);
        Ok(())
    }

    fn list_history_dirs(&self) -> Result<Vec<String>> {
        Ok(self.history.borrow().keys().cloned().collect())
    }

    fn list_history_files(&self, name: &str) -> Result<Vec<String>> {
        self.history
            .borrow()
            .get(name)
            .map(|files| files.keys().cloned().collect())
            .ok_or_else(|| QuireError::HistoryUnavailable(name.to_string()))
    }

    fn read_history_file(&self, name: &str, file: &str) -> Result<Vec<u8>> {
        self.history
            .borrow()
            .get(name)
            .and_then(|files| files.get(file))
            .map(|f| f.bytes.clone())
            .ok_or_else(|| {
                QuireError::history_io(
                    self.history_path(name).join(file),
                    io::ErrorKind::NotFound.into(),
                )
            })
    }

    fn write_history_file(&self, name: &str, file: &str, content: &[u8]) -> Result<()> {
        let mut history = self.history.borrow_mut();
        let files = history
            .get_mut(name)
            .ok_or_else(|| QuireError::HistoryUnavailable(name.to_string()))?;
        if !self.history_write_allowed() {
            return Err(QuireError::history_io(
                self.history_path(name).join(file),
                simulated("write"),
            ));
        }
        files.insert(file.to_string(), StoredFile::new(content));
        Ok(())
    }

    fn remove_history_file(&self, name: &str, file: &str) -> Result<()> {
        let removed = self
            .history
            .borrow_mut()
            .get_mut(name)
            .and_then(|files| files.remove(file));
        match removed {
            Some(_) => Ok(()),
            None => Err(QuireError::history_io(
                self.history_path(name).join(file),
                io::ErrorKind::NotFound.into(),
            )),
        }
    }

    fn history_file_modified(&self, name: &str, file: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .history
            .borrow()
            .get(name)
            .and_then(|files| files.get(file))
            .map(|f| f.mtime))
    }

    fn document_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://documents/{}", name))
    }

    fn history_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://history/{}", name))
    }
}
