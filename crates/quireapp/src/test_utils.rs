use crate::store::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub documents: PathBuf,
    pub history: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let documents = temp_dir.path().join("documents");
        let history = temp_dir.path().join("history");
        let store = FileStore::new_fs(documents.clone(), history.clone());
        Self {
            _temp_dir: temp_dir,
            store,
            documents,
            history,
        }
    }

    pub fn entry_path(&self, name: &str, file: &str) -> PathBuf {
        self.history.join(name).join(file)
    }
}
