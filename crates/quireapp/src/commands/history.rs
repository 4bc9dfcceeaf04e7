use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuireError, Result};
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

/// All stored versions of a live document, oldest first.
pub fn list<B: StorageBackend>(store: &DocStore<B>, name: &str) -> Result<CmdResult> {
    if !store.exists(name)? {
        return Err(QuireError::NotFound(name.to_string()));
    }
    let entries = store.list_entries(name)?;

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no earlier versions.", name)));
    }
    Ok(result.with_entries(entries))
}

/// One stored version.
pub fn show<B: StorageBackend>(store: &DocStore<B>, name: &str, version: u64) -> Result<CmdResult> {
    let entry = store.read_entry(name, version)?;
    Ok(CmdResult::default().with_entries(vec![entry]))
}

/// Drop every stored version, keeping the document and its empty history.
pub fn clear<B: StorageBackend>(store: &DocStore<B>, name: &str) -> Result<CmdResult> {
    let removed = store.delete_entries(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} version{} of {}.",
        removed,
        if removed == 1 { "" } else { "s" },
        name
    )));
    Ok(result)
}
