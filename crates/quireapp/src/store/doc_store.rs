use super::backend::StorageBackend;
use super::history::HistoryStore;
use super::DoctorReport;
use crate::error::{QuireError, Result};
use crate::model::{Document, DocumentSummary, HistoryEntry, SortOrder};
use crate::names::{copy_name, is_valid_name, validate_name};
use crate::version::parse_entry_name;
use log::{info, warn};

/// Document Store: owns live document content and keeps each document's
/// history directory in step with it.
///
/// Mutations are not locked. Callers serialize mutating calls per document
/// name; calls on different names are independent.
pub struct DocStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn history(&self) -> HistoryStore<'_, B> {
        HistoryStore::new(&self.backend)
    }

    /// True iff a live document named exactly `name` exists.
    ///
    /// Names that fail validation never name a document, whatever is on disk
    /// under that path.
    pub fn exists(&self, name: &str) -> Result<bool> {
        if !is_valid_name(name) {
            return Ok(false);
        }
        Ok(self.backend.read_document(name)?.is_some())
    }

    pub fn create(&self, name: &str, content: &[u8]) -> Result<Document> {
        let kind = validate_name(name)?;
        if self.exists(name)? {
            return Err(QuireError::NameTaken(name.to_string()));
        }

        let history = self.history();
        if history.has_history(name)? {
            warn!("discarding stale history directory for {}", name);
            history.delete_history(name)?;
        }

        self.backend.write_document(name, content)?;
        if let Err(e) = history.create_history(name) {
            let _ = self.backend.remove_document(name);
            return Err(e);
        }

        info!("created {}", name);
        Ok(Document::new(name, kind, content.to_vec()))
    }

    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        if !is_valid_name(name) {
            return Err(QuireError::NotFound(name.to_string()));
        }
        self.backend
            .read_document(name)?
            .ok_or_else(|| QuireError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<Document> {
        let content = self.read(name)?;
        let kind = validate_name(name)?;
        Ok(Document::new(name, kind, content))
    }

    /// Replace the content of `name`, pushing the old content to history
    /// first. Returns the new history entry, or `None` when `content` equals
    /// the current content and nothing was written.
    pub fn update(&self, name: &str, content: &[u8]) -> Result<Option<HistoryEntry>> {
        let current = self.read(name)?;
        if current == content {
            return Ok(None);
        }

        // History before content: a failure here leaves the old content live.
        let entry = self.history().append_entry(name, &current)?;
        self.backend.write_document(name, content)?;

        info!("updated {} (previous content saved as version {})", name, entry.version);
        Ok(Some(entry))
    }

    /// Remove the document and its history as one unit.
    ///
    /// Once the content is gone, any problem with the history step is reported
    /// as `PartialDelete`, including a history directory that was already
    /// missing.
    pub fn delete(&self, name: &str) -> Result<()> {
        if !self.exists(name)? {
            return Err(QuireError::NotFound(name.to_string()));
        }
        let history = self.history();
        let had_history = history.has_history(name)?;

        self.backend.remove_document(name)?;

        let history_step = if had_history {
            history.delete_history(name)
        } else {
            Err(QuireError::HistoryUnavailable(name.to_string()))
        };
        if let Err(source) = history_step {
            warn!("{} removed, history step failed: {}", name, source);
            return Err(QuireError::PartialDelete {
                name: name.to_string(),
                source: Box::new(source),
            });
        }

        info!("deleted {}", name);
        Ok(())
    }

    /// Rename a document and its history.
    ///
    /// History is copied under the new name first, then the content moves,
    /// and only then is the old history directory removed. A failed content
    /// move drops the staged copy and leaves the document as it was. If the
    /// old history directory cannot be removed afterwards, the rename has
    /// happened and `RenameIncomplete` reports the leftover directory, which
    /// `doctor` clears as an orphan.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<Document> {
        let kind = validate_name(new_name)?;
        if !self.exists(old_name)? {
            return Err(QuireError::NotFound(old_name.to_string()));
        }
        if self.exists(new_name)? {
            return Err(QuireError::NameTaken(new_name.to_string()));
        }

        let history = self.history();
        if !history.has_history(old_name)? {
            return Err(QuireError::HistoryUnavailable(old_name.to_string()));
        }
        if history.has_history(new_name)? {
            warn!("discarding stale history directory for {}", new_name);
            history.delete_history(new_name)?;
        }
        history.stage_rename(old_name, new_name)?;

        if let Err(source) = self.backend.move_document(old_name, new_name) {
            warn!("content move {} -> {} failed: {}", old_name, new_name, source);
            if let Err(e) = history.delete_history(new_name) {
                warn!("staged history for {} left behind: {}", new_name, e);
            }
            return Err(source);
        }

        if let Err(source) = history.delete_history(old_name) {
            warn!("{} renamed to {}, old history remains: {}", old_name, new_name, source);
            return Err(QuireError::RenameIncomplete {
                from: old_name.to_string(),
                to: new_name.to_string(),
                source: Box::new(source),
            });
        }

        info!("renamed {} to {}", old_name, new_name);
        let content = self.read(new_name)?;
        Ok(Document::new(new_name, kind, content))
    }

    /// Copy a document and its full history to `{base}_copy{ext}`.
    pub fn duplicate(&self, source: &str) -> Result<Document> {
        let content = self.read(source)?;
        let target = copy_name(source);
        let kind = validate_name(&target)?;
        if self.exists(&target)? {
            return Err(QuireError::NameTaken(target));
        }

        let history = self.history();
        if history.has_history(&target)? {
            warn!("discarding stale history directory for {}", target);
            history.delete_history(&target)?;
        }

        self.backend.write_document(&target, &content)?;
        if let Err(e) = history.duplicate_history(source, &target) {
            let _ = self.backend.remove_document(&target);
            let _ = history.delete_history(&target);
            return Err(e);
        }

        info!("duplicated {} as {}", source, target);
        Ok(Document::new(target, kind, content))
    }

    pub fn list_entries(&self, name: &str) -> Result<Vec<HistoryEntry>> {
        if !is_valid_name(name) {
            return Err(QuireError::NotFound(name.to_string()));
        }
        self.history().list_entries(name)
    }

    pub fn read_entry(&self, name: &str, version: u64) -> Result<HistoryEntry> {
        if !self.exists(name)? {
            return Err(QuireError::NotFound(name.to_string()));
        }
        self.history()
            .get_entry(name, version)?
            .ok_or_else(|| QuireError::VersionNotFound {
                name: name.to_string(),
                version,
            })
    }

    /// Clear a live document's history, keeping the empty directory.
    pub fn delete_entries(&self, name: &str) -> Result<usize> {
        if !self.exists(name)? {
            return Err(QuireError::NotFound(name.to_string()));
        }
        let removed = self.history().delete_entries(name)?;
        info!("cleared {} history entries of {}", removed, name);
        Ok(removed)
    }

    /// Live documents with valid names, sorted by name.
    pub fn list(&self, order: SortOrder) -> Result<Vec<DocumentSummary>> {
        let mut names: Vec<String> = self
            .backend
            .list_documents()?
            .into_iter()
            .filter(|n| is_valid_name(n))
            .collect();
        names.sort();
        if order == SortOrder::Descending {
            names.reverse();
        }

        let history = self.history();
        names
            .into_iter()
            .map(|name| {
                let kind = validate_name(&name)?;
                let size = self.backend.read_document(&name)?.map_or(0, |c| c.len());
                Ok(DocumentSummary {
                    kind,
                    size,
                    versions: history.count_entries(&name)?,
                    modified_at: self.backend.document_modified(&name)?,
                    name,
                })
            })
            .collect()
    }

    /// Restore the pairing of live documents and history directories.
    ///
    /// - Live document without history → empty history directory created
    /// - History directory without live document → removed
    /// - Unparseable entry files → reported, left in place
    pub fn doctor(&self) -> Result<DoctorReport> {
        let history = self.history();
        let mut report = DoctorReport::default();

        let live: Vec<String> = self
            .backend
            .list_documents()?
            .into_iter()
            .filter(|n| is_valid_name(n))
            .collect();

        for name in &live {
            if !history.has_history(name)? {
                warn!("{} had no history directory; creating one", name);
                history.create_history(name)?;
                report.created_history_dirs += 1;
            }
            for file in self.backend.list_history_files(name)? {
                if parse_entry_name(&file).is_err() {
                    warn!("malformed history entry {}/{}", name, file);
                    report.malformed_entries.push(format!("{}/{}", name, file));
                }
            }
        }

        for dir in self.backend.list_history_dirs()? {
            if !live.contains(&dir) {
                warn!("removing orphaned history directory {}", dir);
                history.delete_history(&dir)?;
                report.removed_orphan_histories += 1;
            }
        }

        Ok(report)
    }
}
