//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `QUIRE__DOCUMENTS_DIR`, `QUIRE__SORT_DESCENDING`, etc.
//! 2. **Data directory config**: `<data>/quire.toml`
//! 3. **User config**: `quire.toml` in the OS config directory (via `directories`)
//! 4. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `documents_dir` | `<data>/documents` | Where live documents are kept |
//! | `history_dir` | `<data>/history` | Where per-document history directories are kept |
//! | `sort_descending` | `false` | Default listing order |
//!
//! Relative directories are resolved against the data directory.

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::SortOrder;

pub const CONFIG_FILE: &str = "quire.toml";

/// Configuration for quire, stored in `quire.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuireConfig {
    /// Directory holding live documents.
    pub documents_dir: Option<PathBuf>,

    /// Directory holding one history directory per document.
    pub history_dir: Option<PathBuf>,

    /// List documents Z→A unless told otherwise.
    #[config(default = false)]
    pub sort_descending: bool,
}

impl Default for QuireConfig {
    fn default() -> Self {
        Self {
            documents_dir: None,
            history_dir: None,
            sort_descending: false,
        }
    }
}

impl QuireConfig {
    pub fn documents_dir(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, self.documents_dir.as_deref(), "documents")
    }

    pub fn history_dir(&self, data_dir: &Path) -> PathBuf {
        resolve(data_dir, self.history_dir.as_deref(), "history")
    }

    pub fn sort_order(&self) -> SortOrder {
        if self.sort_descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

fn resolve(data_dir: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => data_dir.join(path),
        None => data_dir.join(default),
    }
}
