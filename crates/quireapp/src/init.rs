//! # Startup
//!
//! [`initialize`] turns a data directory into a ready [`QuireApi`]:
//!
//! 1. **Data directory**: the explicit override if given, else the
//!    `QUIRE_DATA` environment variable, else the OS data directory
//!    (via the `directories` crate).
//! 2. **Config**: `quire.toml` from the OS config directory, then from the
//!    data directory, merged (see [`crate::config`]).
//! 3. **Store**: an [`FsBackend`] rooted at the configured documents and
//!    history directories. Directories are created lazily on first write.

use crate::api::{QuireApi, QuirePaths};
use crate::config::{QuireConfig, CONFIG_FILE};
use crate::error::{QuireError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub const DATA_ENV: &str = "QUIRE_DATA";

pub struct QuireContext {
    pub api: QuireApi<FsBackend>,
    pub config: QuireConfig,
    pub data_dir: PathBuf,
}

/// Pick the data directory: override, then `QUIRE_DATA`, then the OS default.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "quire", "quire")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuireError::Config("could not determine a data directory".to_string()))
}

pub fn load_config(data_dir: &Path) -> QuireConfig {
    let mut search_paths = Vec::new();
    if let Some(dirs) = ProjectDirs::from("com", "quire", "quire") {
        search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
    }
    search_paths.push(SearchPath::Path(data_dir.to_path_buf()));

    Clapfig::builder()
        .app_name("quire")
        .file_name(CONFIG_FILE)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_else(|e| {
            warn!("ignoring unreadable configuration: {}", e);
            QuireConfig::default()
        })
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<QuireContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);

    let paths = QuirePaths {
        documents: config.documents_dir(&data_dir),
        history: config.history_dir(&data_dir),
    };
    debug!(
        "documents at {}, history at {}",
        paths.documents.display(),
        paths.history.display()
    );

    let store = FileStore::new_fs(paths.documents.clone(), paths.history.clone());
    let api = QuireApi::new(store, paths);

    Ok(QuireContext {
        api,
        config,
        data_dir,
    })
}
