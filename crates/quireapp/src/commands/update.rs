use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>, name: &str, content: &[u8]) -> Result<CmdResult> {
    let saved = store.update(name, content)?;

    let mut result = CmdResult::default();
    match saved {
        Some(entry) => {
            result.add_message(CmdMessage::success(format!("{} has been updated.", name)));
            result.entries.push(entry);
        }
        None => result.add_message(CmdMessage::info(format!("{} is unchanged.", name))),
    }
    Ok(result.with_affected_documents(vec![store.get(name)?]))
}
