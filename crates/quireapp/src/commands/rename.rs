use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>, old_name: &str, new_name: &str) -> Result<CmdResult> {
    let document = store.rename(old_name, new_name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} renamed to {}",
        old_name, new_name
    )));
    Ok(result.with_affected_documents(vec![document]))
}
