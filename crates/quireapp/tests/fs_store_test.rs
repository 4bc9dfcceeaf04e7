use quireapp::error::QuireError;
use quireapp::model::SortOrder;
use quireapp::store::FileStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new_fs(dir.path().join("documents"), dir.path().join("history"));
    (dir, store)
}

fn history_files(root: &Path, name: &str) -> Vec<String> {
    let mut files: Vec<String> = fs::read_dir(root.join("history").join(name))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    files
}

#[test]
fn test_notes_scenario_on_disk() {
    let (dir, store) = setup();

    store.create("notes.txt", b"").unwrap();
    store.update("notes.txt", b"v1").unwrap();
    store.update("notes.txt", b"v2").unwrap();

    let entries = store.list_entries("notes.txt").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].version, entries[0].content.as_slice()), (1, &b""[..]));
    assert_eq!((entries[1].version, entries[1].content.as_slice()), (2, &b"v1"[..]));
    assert_eq!(store.read("notes.txt").unwrap(), b"v2");

    assert_eq!(history_files(dir.path(), "notes.txt"), vec!["1_notes.txt", "2_notes.txt"]);
}

#[test]
fn test_rename_round_trip_on_disk() {
    let (dir, store) = setup();
    store.create("a.txt", b"").unwrap();
    store.update("a.txt", b"1").unwrap();
    store.update("a.txt", b"2").unwrap();

    store.rename("a.txt", "b.md").unwrap();
    assert!(!dir.path().join("documents/a.txt").exists());
    assert!(!dir.path().join("history/a.txt").exists());
    assert_eq!(history_files(dir.path(), "b.md"), vec!["1_b.md", "2_b.md"]);

    store.rename("b.md", "a.txt").unwrap();
    assert_eq!(store.read("a.txt").unwrap(), b"2");
    assert_eq!(history_files(dir.path(), "a.txt"), vec!["1_a.txt", "2_a.txt"]);
    assert!(!dir.path().join("history/b.md").exists());
}

#[test]
fn test_invalid_rename_touches_nothing() {
    let (dir, store) = setup();
    store.create("a.txt", b"keep").unwrap();
    store.update("a.txt", b"keep2").unwrap();

    let err = store.rename("a.txt", "b.exe").unwrap_err();
    assert!(matches!(err, QuireError::InvalidName(_)));

    assert_eq!(fs::read(dir.path().join("documents/a.txt")).unwrap(), b"keep2");
    assert_eq!(history_files(dir.path(), "a.txt"), vec!["1_a.txt"]);
    assert!(!dir.path().join("documents/b.exe").exists());
    assert!(!dir.path().join("history/b.exe").exists());
}

#[test]
fn test_duplicate_on_disk_is_independent() {
    let (dir, store) = setup();
    store.create("a.md", b"").unwrap();
    store.update("a.md", b"x").unwrap();

    store.duplicate("a.md").unwrap();
    assert_eq!(history_files(dir.path(), "a_copy.md"), vec!["1_a_copy.md"]);

    store.update("a.md", b"y").unwrap();
    assert_eq!(history_files(dir.path(), "a.md").len(), 2);
    assert_eq!(history_files(dir.path(), "a_copy.md").len(), 1);

    assert!(matches!(
        store.duplicate("a.md"),
        Err(QuireError::NameTaken(_))
    ));
}

#[test]
fn test_delete_after_external_history_removal() {
    let (dir, store) = setup();
    store.create("a.txt", b"").unwrap();
    fs::remove_dir_all(dir.path().join("history/a.txt")).unwrap();

    let err = store.delete("a.txt").unwrap_err();
    assert!(matches!(err, QuireError::PartialDelete { .. }));
    assert!(!dir.path().join("documents/a.txt").exists());
}

#[test]
fn test_delete_removes_both_directories() {
    let (dir, store) = setup();
    store.create("a.txt", b"").unwrap();
    store.update("a.txt", b"1").unwrap();
    store.delete("a.txt").unwrap();

    assert!(!dir.path().join("documents/a.txt").exists());
    assert!(!dir.path().join("history/a.txt").exists());
    assert!(store.list(SortOrder::Ascending).unwrap().is_empty());
}

#[test]
fn test_stray_file_in_history_is_malformed() {
    let (dir, store) = setup();
    store.create("a.txt", b"").unwrap();
    fs::write(dir.path().join("history/a.txt/notes"), b"?").unwrap();

    assert!(matches!(
        store.list_entries("a.txt"),
        Err(QuireError::MalformedHistoryEntry(_))
    ));
    let report = store.doctor().unwrap();
    assert_eq!(report.malformed_entries, vec!["a.txt/notes".to_string()]);
    assert!(dir.path().join("history/a.txt/notes").exists());
}

#[test]
fn test_doctor_removes_orphan_history_dirs() {
    let (dir, store) = setup();
    store.create("a.txt", b"").unwrap();
    fs::remove_file(dir.path().join("documents/a.txt")).unwrap();

    let report = store.doctor().unwrap();
    assert_eq!(report.removed_orphan_histories, 1);
    assert!(!dir.path().join("history/a.txt").exists());
}

#[test]
fn test_list_reports_sizes_and_versions() {
    let (_dir, store) = setup();
    store.create("about.md", b"# About").unwrap();
    store.create("changes.txt", b"").unwrap();
    store.update("changes.txt", b"one").unwrap();

    let listed = store.list(SortOrder::Descending).unwrap();
    assert_eq!(listed[0].name, "changes.txt");
    assert_eq!(listed[0].size, 3);
    assert_eq!(listed[0].versions, 1);
    assert_eq!(listed[1].name, "about.md");
    assert!(listed[1].modified_at.is_some());
}

#[test]
fn test_names_cannot_escape_documents_root() {
    let (dir, store) = setup();
    fs::create_dir_all(dir.path().join("documents")).unwrap();
    let secret = dir.path().join("secret.txt");
    fs::write(&secret, b"outside").unwrap();

    assert!(matches!(
        store.read("../secret.txt"),
        Err(QuireError::NotFound(_))
    ));
    assert!(matches!(
        store.delete("../secret.txt"),
        Err(QuireError::NotFound(_))
    ));
    assert!(matches!(
        store.rename("../secret.txt", "mine.txt"),
        Err(QuireError::NotFound(_))
    ));
    assert_eq!(fs::read(&secret).unwrap(), b"outside");
    assert!(!dir.path().join("documents/mine.txt").exists());
}

#[test]
fn test_update_after_top_version_tag_fails_cleanly() {
    let (dir, store) = setup();
    store.create("a.txt", b"old").unwrap();
    fs::write(
        dir.path().join(format!("history/a.txt/{}_a.txt", u64::MAX)),
        b"x",
    )
    .unwrap();

    assert!(matches!(
        store.update("a.txt", b"new"),
        Err(QuireError::MalformedHistoryEntry(_))
    ));
    assert_eq!(store.read("a.txt").unwrap(), b"old");
}
