//! # Quire Architecture
//!
//! Quire is a document store that keeps, for every named document, its
//! current content plus an ordered history of prior versions. Renaming or
//! duplicating a document carries its history along.
//!
//! This crate is the versioning core. It has no opinion about how requests
//! arrive: the bundled `quire` binary is one caller, a web front end could be
//! another. Authentication and request handling live with the caller.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, UI-agnostic                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocStore: live documents, coordinates history            │
//! │  - HistoryStore: per-document version directories           │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure rules sit beside the layers: [`names`] (which names are acceptable)
//! and [`version`] (how version tags are assigned and parsed).
//!
//! ## Concurrency
//!
//! There is no locking. Callers serialize mutating operations per document
//! name. Reads may run concurrently, and mutations on different names are
//! independent.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Document and history stores, storage backends
//! - [`model`]: `Document`, `HistoryEntry` and listing types
//! - [`names`]: Document name rules
//! - [`version`]: Version numbering and entry file names
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and store construction
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod names;
pub mod store;
pub mod version;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
