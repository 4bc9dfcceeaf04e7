//! # Domain Model
//!
//! - [`Document`]: a live document, identified by its unique name.
//! - [`HistoryEntry`]: one immutable prior snapshot of a document, identified
//!   by its version tag.
//! - [`DocumentSummary`]: the listing row for a document.
//!
//! Content is an opaque byte sequence. Nothing in the store interprets it
//! except [`crate::commands::render`], which treats Markdown documents as UTF-8.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::version::entry_file_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Markdown,
}

impl DocumentKind {
    /// Maps an extension (with its leading dot) to a kind. Matching is exact.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".txt" => Some(Self::Text),
            ".md" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => ".txt",
            Self::Markdown => ".md",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    #[serde(serialize_with = "serialize_lossy")]
    pub content: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, kind: DocumentKind, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            kind,
            content,
        }
    }

    /// Content decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub version: u64,
    pub document: String,
    #[serde(serialize_with = "serialize_lossy")]
    pub content: Vec<u8>,
    /// Time the snapshot was written, when the backend tracks it.
    pub saved_at: Option<DateTime<Utc>>,
}

impl HistoryEntry {
    /// `{version}_{document}`
    pub fn file_name(&self) -> String {
        entry_file_name(self.version, &self.document)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub kind: DocumentKind,
    pub size: usize,
    pub versions: usize,
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Display form of a document: HTML for Markdown, verbatim text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", content = "body", rename_all = "lowercase")]
pub enum Rendered {
    Html(String),
    Plain(String),
}

impl Rendered {
    pub fn body(&self) -> &str {
        match self {
            Rendered::Html(s) | Rendered::Plain(s) => s,
        }
    }
}

fn serialize_lossy<S>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
