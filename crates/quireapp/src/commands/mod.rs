//! # Command Layer
//!
//! One submodule per operation. Commands take a [`DocStore`] and plain Rust
//! arguments and return a structured [`CmdResult`]; they never print, prompt
//! or exit. Any UI (the bundled CLI, a web front end) decides how to show
//! the result.
//!
//! Authorization is the caller's job: by the time a mutating command runs,
//! the caller has already decided the action is allowed.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a new document with an empty history
//! - [`list`]: List live documents
//! - [`view`]: Read a document, optionally rendered
//! - [`update`]: Replace content, saving the previous content as a version
//! - [`delete`]: Remove a document and its history
//! - [`rename`]: Rename a document and its history
//! - [`duplicate`]: Copy a document and its history to `{base}_copy{ext}`
//! - [`history`]: List versions, read one version, clear all versions
//! - [`restore`]: Make a stored version current again
//! - [`doctor`]: Repair the document/history pairing
//!
//! [`DocStore`]: crate::store::doc_store::DocStore

use crate::model::{Document, DocumentSummary, HistoryEntry, Rendered};
use crate::store::DoctorReport;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod doctor;
pub mod duplicate;
pub mod history;
pub mod list;
pub mod rename;
pub mod restore;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_documents: Vec<Document>,
    pub listed_documents: Vec<DocumentSummary>,
    pub entries: Vec<HistoryEntry>,
    pub rendered: Option<Rendered>,
    pub report: Option<DoctorReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_documents(mut self, documents: Vec<Document>) -> Self {
        self.affected_documents = documents;
        self
    }

    pub fn with_listed_documents(mut self, documents: Vec<DocumentSummary>) -> Self {
        self.listed_documents = documents;
        self
    }

    pub fn with_entries(mut self, entries: Vec<HistoryEntry>) -> Self {
        self.entries = entries;
        self
    }
}
