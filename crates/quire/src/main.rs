//! # Quire CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, and this file only calls
//! `cli::run()` and turns an error into exit status 1.
//!
//! ## Workspace Structure
//!
//! - `crates/quireapp/`: the versioned document store, UI-agnostic
//! - `crates/quire/`: this CLI, a caller of the `quireapp` API facade
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/quire/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and dispatch (commands.rs)                │
//! │  - Terminal and JSON output (print.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/quireapp/src/api.rs)                     │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the API is tested with the in-memory backend. The CLI is
//! covered end to end in `tests/cli_e2e.rs`, against a temporary data root
//! selected through `QUIRE_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
