use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire", bin_name = "quire", version)]
#[command(about = "Versioned document store for text and Markdown files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides QUIRE_DATA)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documents
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Newest name first (reverse lexicographic)
        #[arg(long)]
        desc: bool,
    },

    /// Create a new document
    #[command(alias = "n", display_order = 2)]
    Create {
        /// Document name, ending in .txt or .md
        name: String,

        /// Initial content (empty when omitted)
        #[arg(long, short)]
        content: Option<String>,
    },

    /// Show a document
    #[command(alias = "v", display_order = 3)]
    View {
        name: String,

        /// Render Markdown to HTML
        #[arg(long)]
        render: bool,
    },

    /// Replace a document's content, keeping the old content as a version
    #[command(display_order = 4)]
    Update {
        name: String,

        /// New content (read from stdin when omitted)
        #[arg(long, short)]
        content: Option<String>,
    },

    /// Delete a document and its history
    #[command(alias = "rm", display_order = 5)]
    Delete { name: String },

    /// Rename a document, carrying its history
    #[command(alias = "mv", display_order = 6)]
    Rename { old: String, new: String },

    /// Copy a document and its history to <base>_copy<ext>
    #[command(alias = "cp", display_order = 7)]
    Duplicate { name: String },

    /// List stored versions of a document
    #[command(display_order = 10)]
    History { name: String },

    /// Show one stored version
    #[command(display_order = 11)]
    Show { name: String, version: u64 },

    /// Make a stored version current again
    #[command(display_order = 12)]
    Restore { name: String, version: u64 },

    /// Remove every stored version of a document
    #[command(display_order = 13)]
    ClearHistory { name: String },

    /// Check and repair the pairing of documents and history directories
    #[command(display_order = 20)]
    Doctor,
}
