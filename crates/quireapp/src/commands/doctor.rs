use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::doc_store::DocStore;

pub fn run<B: StorageBackend>(store: &DocStore<B>) -> Result<CmdResult> {
    let report = store.doctor()?;

    let mut result = CmdResult::default();
    if report.is_clean() {
        result.add_message(CmdMessage::success("No issues found."));
    } else {
        if report.created_history_dirs > 0 {
            result.add_message(CmdMessage::info(format!(
                "Created {} missing history director{}.",
                report.created_history_dirs,
                if report.created_history_dirs == 1 { "y" } else { "ies" }
            )));
        }
        if report.removed_orphan_histories > 0 {
            result.add_message(CmdMessage::info(format!(
                "Removed {} orphaned history director{}.",
                report.removed_orphan_histories,
                if report.removed_orphan_histories == 1 { "y" } else { "ies" }
            )));
        }
        for entry in &report.malformed_entries {
            result.add_message(CmdMessage::warning(format!(
                "Malformed history entry left in place: {}",
                entry
            )));
        }
    }
    result.report = Some(report);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::backend::StorageBackend;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn clean_store() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "a.txt", b"").unwrap();
        let result = run(&store).unwrap();
        assert_eq!(result.messages[0].content, "No issues found.");
    }

    #[test]
    fn reports_repairs() {
        let store = DocStore::with_backend(MemBackend::new());
        create::run(&store, "a.txt", b"").unwrap();
        store.backend.remove_history_dir("a.txt").unwrap();

        let result = run(&store).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Created 1 missing history directory."
        );
        assert_eq!(result.report.unwrap().created_history_dirs, 1);
    }
}
