use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>, name: &str) -> Result<CmdResult> {
    let document = store.get(name)?;
    store.delete(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} has been deleted.", name)));
    Ok(result.with_affected_documents(vec![document]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, update};
    use crate::error::QuireError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn deletes_document_and_history() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "a.md", b"").unwrap();
        update::run(&store, "a.md", b"x").unwrap();

        let result = run(&store, "a.md").unwrap();
        assert_eq!(result.messages[0].content, "a.md has been deleted.");
        assert!(!store.exists("a.md").unwrap());
        assert!(store.list_entries("a.md").unwrap().is_empty());
    }

    #[test]
    fn partial_delete_propagates() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "a.md", b"").unwrap();
        store.backend.set_fail_history_removal(true);

        assert!(matches!(
            run(&store, "a.md"),
            Err(QuireError::PartialDelete { .. })
        ));
    }
}
