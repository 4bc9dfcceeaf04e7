use super::backend::StorageBackend;
use crate::error::{QuireError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend.
///
/// ```text
/// <documents_root>/
///   notes.txt                 # live content
/// <history_root>/
///   notes.txt/
///     1_notes.txt             # content before the first update
///     2_notes.txt
/// ```
pub struct FsBackend {
    documents_root: PathBuf,
    history_root: PathBuf,
}

impl FsBackend {
    pub fn new(documents_root: PathBuf, history_root: PathBuf) -> Self {
        Self {
            documents_root,
            history_root,
        }
    }

    pub fn documents_root(&self) -> &Path {
        &self.documents_root
    }

    pub fn history_root(&self) -> &Path {
        &self.history_root
    }

    fn ensure_dir(path: &Path) -> std::io::Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Atomic write: tmp file in the same directory, then rename over the target.
    fn write_atomic(dir: &Path, file: &str, content: &[u8]) -> std::io::Result<()> {
        Self::ensure_dir(dir)?;
        let tmp_path = dir.join(format!(".{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, dir.join(file)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }

    /// Visible entry names in `dir` matching `want`; hidden tmp files are skipped.
    fn list_names(dir: &Path, want: fn(&fs::FileType) -> bool) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !want(&entry.file_type()?) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn modified(path: &Path) -> std::io::Result<Option<DateTime<Utc>>> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.modified().ok().map(DateTime::<Utc>::from)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.document_path(name);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read(&path)
            .map(Some)
            .map_err(|e| QuireError::io(path, e))
    }

    fn write_document(&self, name: &str, content: &[u8]) -> Result<()> {
        Self::write_atomic(&self.documents_root, name, content)
            .map_err(|e| QuireError::io(self.document_path(name), e))
    }

    fn remove_document(&self, name: &str) -> Result<()> {
        let path = self.document_path(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QuireError::io(path, e)),
        }
    }

    fn move_document(&self, from: &str, to: &str) -> Result<()> {
        let source = self.document_path(from);
        fs::rename(&source, self.document_path(to)).map_err(|e| QuireError::io(source, e))
    }

    fn list_documents(&self) -> Result<Vec<String>> {
        if !self.documents_root.exists() {
            return Ok(Vec::new());
        }
        Self::list_names(&self.documents_root, fs::FileType::is_file)
            .map_err(|e| QuireError::io(&self.documents_root, e))
    }

    fn document_modified(&self, name: &str) -> Result<Option<DateTime<Utc>>> {
        let path = self.document_path(name);
        Self::modified(&path).map_err(|e| QuireError::io(path, e))
    }

    fn history_exists(&self, name: &str) -> Result<bool> {
        Ok(self.history_path(name).is_dir())
    }

    fn create_history_dir(&self, name: &str) -> Result<()> {
        let dir = self.history_path(name);
        Self::ensure_dir(&dir).map_err(|e| QuireError::history_io(dir, e))
    }

    fn remove_history_dir(&self, name: &str) -> Result<()> {
        let dir = self.history_path(name);
        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(QuireError::history_io(dir, e)),
        }
    }

    fn list_history_dirs(&self) -> Result<Vec<String>> {
        if !self.history_root.exists() {
            return Ok(Vec::new());
        }
        Self::list_names(&self.history_root, fs::FileType::is_dir)
            .map_err(|e| QuireError::history_io(&self.history_root, e))
    }

    fn list_history_files(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.history_path(name);
        if !dir.is_dir() {
            return Err(QuireError::HistoryUnavailable(name.to_string()));
        }
        Self::list_names(&dir, fs::FileType::is_file).map_err(|e| QuireError::history_io(dir, e))
    }

    fn read_history_file(&self, name: &str, file: &str) -> Result<Vec<u8>> {
        let path = self.history_path(name).join(file);
        fs::read(&path).map_err(|e| QuireError::history_io(path, e))
    }

    fn write_history_file(&self, name: &str, file: &str, content: &[u8]) -> Result<()> {
        let dir = self.history_path(name);
        if !dir.is_dir() {
            return Err(QuireError::HistoryUnavailable(name.to_string()));
        }
        Self::write_atomic(&dir, file, content)
            .map_err(|e| QuireError::history_io(dir.join(file), e))
    }

    fn remove_history_file(&self, name: &str, file: &str) -> Result<()> {
        let path = self.history_path(name).join(file);
        fs::remove_file(&path).map_err(|e| QuireError::history_io(path, e))
    }

    fn history_file_modified(&self, name: &str, file: &str) -> Result<Option<DateTime<Utc>>> {
        let path = self.history_path(name).join(file);
        Self::modified(&path).map_err(|e| QuireError::history_io(path, e))
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.documents_root.join(name)
    }

    fn history_path(&self, name: &str) -> PathBuf {
        self.history_root.join(name)
    }
}
