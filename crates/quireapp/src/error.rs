use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Invalid name '{0}' (.txt and .md files only)")]
    InvalidName(String),

    #[error("A name is required")]
    EmptyName,

    #[error("A document named '{0}' already exists")]
    NameTaken(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("{name} has no version {version}")]
    VersionNotFound { name: String, version: u64 },

    #[error("No history directory for '{0}'")]
    HistoryUnavailable(String),

    #[error("Malformed history entry '{0}' (expected '{{version}}_{{name}}')")]
    MalformedHistoryEntry(String),

    #[error("History I/O error at '{path}': {source}")]
    HistoryIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Renaming history of '{from}' to '{to}' stopped midway; both history directories were kept")]
    RenamePartialFailure {
        from: String,
        to: String,
        source: Box<QuireError>,
    },

    #[error("'{from}' was renamed to '{to}' but its old history directory remains; run doctor to remove it")]
    RenameIncomplete {
        from: String,
        to: String,
        source: Box<QuireError>,
    },

    #[error("'{name}' was removed but its history could not be: {source}")]
    PartialDelete {
        name: String,
        source: Box<QuireError>,
    },

    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuireError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QuireError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn history_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QuireError::HistoryIo {
            path: path.into(),
            source,
        }
    }

    /// True for the states that left the store consistent-but-incomplete and
    /// need the caller to decide on cleanup or a retry.
    pub fn is_partial(&self) -> bool {
        matches!(
            self,
            QuireError::RenamePartialFailure { .. }
                | QuireError::RenameIncomplete { .. }
                | QuireError::PartialDelete { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QuireError>;
