//! # CLI Behavior
//!
//! This is one client of quire, not the application itself. It is the only
//! place that knows about stdin/stdout, exit codes and colors.
//!
//! Running `quire` with no subcommand lists documents.
//!
//! `quire update <name>` takes the new content from `--content` when given,
//! otherwise it reads all of stdin:
//!
//! ```text
//! cat draft.md | quire update about.md
//! ```
//!
//! With `--json` every command prints its `CmdResult` as JSON instead of
//! styled text.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup and dispatch to the API
//! - `print`: Terminal and JSON output

mod commands;
mod print;
pub mod setup;

pub use commands::run;
