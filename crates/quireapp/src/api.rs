//! # API Facade
//!
//! [`QuireApi`] is the single entry point for callers (the bundled CLI, or a
//! web layer). It dispatches to the command layer and returns structured
//! [`CmdResult`](commands::CmdResult) values.
//!
//! The API holds no business logic and does no I/O of its own. It is generic
//! over the storage backend:
//! - Production: `QuireApi<FsBackend>`
//! - Testing: `QuireApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::SortOrder;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;
use std::path::PathBuf;

/// Where the store keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuirePaths {
    pub documents: PathBuf,
    pub history: PathBuf,
}

pub struct QuireApi<B: StorageBackend> {
    store: DocStore<B>,
    paths: QuirePaths,
}

impl<B: StorageBackend> QuireApi<B> {
    pub fn new(store: DocStore<B>, paths: QuirePaths) -> Self {
        Self { store, paths }
    }

    pub fn paths(&self) -> &QuirePaths {
        &self.paths
    }

    pub fn store(&self) -> &DocStore<B> {
        &self.store
    }

    pub fn create_document(&self, name: &str, content: &[u8]) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, name, content)
    }

    pub fn list_documents(&self, order: SortOrder) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, order)
    }

    pub fn view_document(&self, name: &str, render: bool) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, name, render)
    }

    pub fn update_document(&self, name: &str, content: &[u8]) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, name, content)
    }

    pub fn delete_document(&self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, name)
    }

    pub fn rename_document(&self, old_name: &str, new_name: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&self.store, old_name, new_name)
    }

    pub fn duplicate_document(&self, name: &str) -> Result<commands::CmdResult> {
        commands::duplicate::run(&self.store, name)
    }

    pub fn list_versions(&self, name: &str) -> Result<commands::CmdResult> {
        commands::history::list(&self.store, name)
    }

    pub fn show_version(&self, name: &str, version: u64) -> Result<commands::CmdResult> {
        commands::history::show(&self.store, name, version)
    }

    pub fn clear_versions(&self, name: &str) -> Result<commands::CmdResult> {
        commands::history::clear(&self.store, name)
    }

    pub fn restore_version(&self, name: &str, version: u64) -> Result<commands::CmdResult> {
        commands::restore::run(&self.store, name, version)
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuireError;
    use crate::store::mem_backend::MemBackend;

    fn make_api() -> QuireApi<MemBackend> {
        let store = DocStore::with_backend(MemBackend::new());
        QuireApi::new(
            store,
            QuirePaths {
                documents: PathBuf::from("documents"),
                history: PathBuf::from("history"),
            },
        )
    }

    #[test]
    fn dispatches_full_lifecycle() {
        let api = make_api();
        api.create_document("notes.txt", b"").unwrap();
        api.update_document("notes.txt", b"v1").unwrap();
        api.update_document("notes.txt", b"v2").unwrap();

        let versions = api.list_versions("notes.txt").unwrap();
        assert_eq!(versions.entries.len(), 2);

        let view = api.view_document("notes.txt", false).unwrap();
        assert_eq!(view.affected_documents[0].text(), "v2");

        api.rename_document("notes.txt", "notes.md").unwrap();
        api.duplicate_document("notes.md").unwrap();
        let listed = api.list_documents(SortOrder::Ascending).unwrap();
        let names: Vec<_> = listed.listed_documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["notes.md", "notes_copy.md"]);

        api.restore_version("notes_copy.md", 2).unwrap();
        assert_eq!(
            api.show_version("notes_copy.md", 3).unwrap().entries[0].text(),
            "v2"
        );

        api.clear_versions("notes.md").unwrap();
        api.delete_document("notes.md").unwrap();
        assert!(matches!(
            api.view_document("notes.md", false),
            Err(QuireError::NotFound(_))
        ));
        assert!(api.doctor().unwrap().report.unwrap().is_clean());
    }
}
