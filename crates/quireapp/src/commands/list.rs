use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SortOrder;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>, order: SortOrder) -> Result<CmdResult> {
    let documents = store.list(order)?;

    let mut result = CmdResult::default();
    if documents.is_empty() {
        result.add_message(CmdMessage::info("No documents yet."));
    }
    Ok(result.with_listed_documents(documents))
}
