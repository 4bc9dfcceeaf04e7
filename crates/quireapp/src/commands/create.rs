use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>, name: &str, content: &[u8]) -> Result<CmdResult> {
    let document = store.create(name, content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} has been created.",
        document.name
    )));
    Ok(result.with_affected_documents(vec![document]))
}
