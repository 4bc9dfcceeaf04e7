use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>, name: &str) -> Result<CmdResult> {
    let copy = store.duplicate(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "A copy of {} was created as {}.",
        name, copy.name
    )));
    Ok(result.with_affected_documents(vec![copy]))
}
