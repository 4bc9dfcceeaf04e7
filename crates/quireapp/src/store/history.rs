//! # History Store
//!
//! Owns the per-document history directories. Each live document has exactly
//! one directory, holding one file per prior version named `{version}_{name}`.
//!
//! ## Rename and duplicate
//!
//! Entry file names embed the document name, so moving or copying a history
//! rewrites every file name while keeping its version tag. Rename is staged:
//! all entries are copied into the new directory before the old one is
//! removed. If a copy fails, both directories are left in place and the call
//! returns [`QuireError::RenamePartialFailure`]; the old directory is still
//! complete, so nothing is lost.
//!
//! ## Failure policy
//!
//! Filesystem failures surface unchanged as [`QuireError::HistoryIo`]. Nothing
//! is retried here.

use super::backend::StorageBackend;
use crate::error::{QuireError, Result};
use crate::model::HistoryEntry;
use crate::version::{entry_file_name, next_version, parse_entry_name};
use log::{debug, warn};

pub struct HistoryStore<'a, B: StorageBackend> {
    backend: &'a B,
}

/// Version tag and on-disk file name of one entry, before its content is read.
struct EntryFile {
    version: u64,
    file: String,
}

impl<'a, B: StorageBackend> HistoryStore<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub fn has_history(&self, name: &str) -> Result<bool> {
        self.backend.history_exists(name)
    }

    /// Create an empty history directory. No-op if one already exists.
    pub fn create_history(&self, name: &str) -> Result<()> {
        self.backend.create_history_dir(name)?;
        debug!("history directory ready for {}", name);
        Ok(())
    }

    /// Remove the history directory and all its entries. No-op if absent.
    pub fn delete_history(&self, name: &str) -> Result<()> {
        self.backend.remove_history_dir(name)?;
        debug!("history directory removed for {}", name);
        Ok(())
    }

    /// All entries for `name`, ascending by version. Empty if there is no
    /// history directory.
    pub fn list_entries(&self, name: &str) -> Result<Vec<HistoryEntry>> {
        if !self.backend.history_exists(name)? {
            return Ok(Vec::new());
        }
        self.entry_files(name)?
            .into_iter()
            .map(|entry| self.load(name, entry))
            .collect()
    }

    /// Number of entries for `name`, without reading their content.
    pub fn count_entries(&self, name: &str) -> Result<usize> {
        if !self.backend.history_exists(name)? {
            return Ok(0);
        }
        Ok(self.entry_files(name)?.len())
    }

    /// The entry carrying `version`, if any.
    pub fn get_entry(&self, name: &str, version: u64) -> Result<Option<HistoryEntry>> {
        if !self.backend.history_exists(name)? {
            return Ok(None);
        }
        self.entry_files(name)?
            .into_iter()
            .find(|entry| entry.version == version)
            .map(|entry| self.load(name, entry))
            .transpose()
    }

    /// Store `content` as the next version of `name`.
    ///
    /// Fails with `HistoryUnavailable` if `create_history` was never called,
    /// and with `MalformedHistoryEntry` if the highest tag on disk is
    /// `u64::MAX`.
    pub fn append_entry(&self, name: &str, content: &[u8]) -> Result<HistoryEntry> {
        let existing = self.entry_files(name)?;
        let version = next_version(existing.iter().map(|e| e.version)).ok_or_else(|| {
            QuireError::MalformedHistoryEntry(entry_file_name(u64::MAX, name))
        })?;
        let file = entry_file_name(version, name);

        self.backend.write_history_file(name, &file, content)?;
        debug!("wrote history entry {} ({} bytes)", file, content.len());

        Ok(HistoryEntry {
            version,
            document: name.to_string(),
            content: content.to_vec(),
            saved_at: self.backend.history_file_modified(name, &file)?,
        })
    }

    /// Move every entry of `old_name` under `new_name`, rewriting the name
    /// embedded in each file name.
    pub fn rename_history(&self, old_name: &str, new_name: &str) -> Result<()> {
        let moved = self.stage_rename(old_name, new_name)?;

        if let Err(source) = self.backend.remove_history_dir(old_name) {
            warn!(
                "history of {} copied to {} but the old directory remains: {}",
                old_name, new_name, source
            );
            return Err(QuireError::RenamePartialFailure {
                from: old_name.to_string(),
                to: new_name.to_string(),
                source: Box::new(source),
            });
        }

        debug!("moved {} history entries from {} to {}", moved, old_name, new_name);
        Ok(())
    }

    /// First half of a rename: copy every entry of `old_name` under
    /// `new_name` and leave the old directory untouched. Returns the number
    /// of entries copied.
    ///
    /// A failure leaves whatever was copied in place and returns
    /// `RenamePartialFailure`.
    pub fn stage_rename(&self, old_name: &str, new_name: &str) -> Result<usize> {
        let entries = self.entry_files(old_name)?;

        let staged = self
            .backend
            .create_history_dir(new_name)
            .and_then(|_| self.copy_entries(old_name, new_name, &entries));
        if let Err(source) = staged {
            warn!(
                "history rename {} -> {} failed while staging: {}",
                old_name, new_name, source
            );
            return Err(QuireError::RenamePartialFailure {
                from: old_name.to_string(),
                to: new_name.to_string(),
                source: Box::new(source),
            });
        }
        Ok(entries.len())
    }

    /// Copy every entry of `source` under `target`, keeping version tags.
    /// The source history is left untouched.
    pub fn duplicate_history(&self, source: &str, target: &str) -> Result<()> {
        let entries = self.entry_files(source)?;
        self.backend.create_history_dir(target)?;
        self.copy_entries(source, target, &entries)?;
        debug!(
            "copied {} history entries from {} to {}",
            entries.len(),
            source,
            target
        );
        Ok(())
    }

    /// Remove every entry but keep the (now empty) directory.
    ///
    /// Also removes files that do not parse as entries. Returns the number of
    /// files removed.
    pub fn delete_entries(&self, name: &str) -> Result<usize> {
        let files = self.backend.list_history_files(name)?;
        for file in &files {
            self.backend.remove_history_file(name, file)?;
        }
        debug!("cleared {} history files of {}", files.len(), name);
        Ok(files.len())
    }

    /// Parsed entry files of `name`, ascending by version.
    fn entry_files(&self, name: &str) -> Result<Vec<EntryFile>> {
        let mut entries = self
            .backend
            .list_history_files(name)?
            .into_iter()
            .map(|file| {
                let (version, _) = parse_entry_name(&file)?;
                Ok(EntryFile { version, file })
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.version);
        Ok(entries)
    }

    fn load(&self, name: &str, entry: EntryFile) -> Result<HistoryEntry> {
        Ok(HistoryEntry {
            version: entry.version,
            document: name.to_string(),
            content: self.backend.read_history_file(name, &entry.file)?,
            saved_at: self.backend.history_file_modified(name, &entry.file)?,
        })
    }

    fn copy_entries(&self, from: &str, to: &str, entries: &[EntryFile]) -> Result<()> {
        for entry in entries {
            let content = self.backend.read_history_file(from, &entry.file)?;
            let renamed = entry_file_name(entry.version, to);
            self.backend.write_history_file(to, &renamed, &content)?;
        }
        Ok(())
    }
}
