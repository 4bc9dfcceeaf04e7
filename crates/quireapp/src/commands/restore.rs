use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

/// Make `version` the current content of `name`.
///
/// Goes through a regular update, so the content being replaced is saved as
/// a new version first and restoring the current content is a no-op.
pub fn run<B: StorageBackend>(store: &DocStore<B>, name: &str, version: u64) -> Result<CmdResult> {
    let entry = store.read_entry(name, version)?;
    let saved = store.update(name, &entry.content)?;

    let mut result = CmdResult::default();
    match saved {
        Some(previous) => {
            result.add_message(CmdMessage::success(format!(
                "{} restored to version {} (previous content kept as version {}).",
                name, version, previous.version
            )));
            result.entries.push(previous);
        }
        None => result.add_message(CmdMessage::info(format!(
            "{} already matches version {}.",
            name, version
        ))),
    }
    Ok(result.with_affected_documents(vec![store.get(name)?]))
}
