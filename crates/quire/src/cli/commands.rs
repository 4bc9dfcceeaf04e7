//! # CLI Layer
//!
//! Parses arguments, sets up logging and the store, dispatches one command
//! to the API facade and prints the result.

use super::print::{print_result, OutputMode};
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;
use quireapp::api::QuireApi;
use quireapp::error::QuireError;
use quireapp::init::{initialize, QuireContext};
use quireapp::model::SortOrder;
use quireapp::store::fs_backend::FsBackend;
use std::io::Read;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.data.clone())?;
    debug!(
        "data root {}, documents {}, history {}",
        ctx.data_dir.display(),
        ctx.api.paths().documents.display(),
        ctx.api.paths().history.display()
    );

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Terminal
    };
    let command = cli.command.unwrap_or(Commands::List { desc: false });
    let view = CommandView::of(&command);
    let result = dispatch(&ctx, command).inspect_err(|e| {
        if e.downcast_ref::<QuireError>().is_some_and(QuireError::is_partial) {
            eprintln!(
                "{}",
                "The store was only partly updated. Repeat the command or run `quire doctor`.".yellow()
            );
        }
    })?;
    print_result(&result, view, mode)
}

/// Default filter is `warn`, `-v` raises it to `debug`. `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Which layout the printer should use for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandView {
    Listing,
    Document,
    History,
    Version,
    Messages,
}

impl CommandView {
    fn of(command: &Commands) -> Self {
        match command {
            Commands::List { .. } => CommandView::Listing,
            Commands::View { .. } => CommandView::Document,
            Commands::History { .. } => CommandView::History,
            Commands::Show { .. } => CommandView::Version,
            _ => CommandView::Messages,
        }
    }
}

fn dispatch(ctx: &QuireContext, command: Commands) -> Result<quireapp::commands::CmdResult> {
    let api: &QuireApi<FsBackend> = &ctx.api;

    let result = match command {
        Commands::List { desc } => {
            let order = if desc {
                SortOrder::Descending
            } else {
                ctx.config.sort_order()
            };
            api.list_documents(order)?
        }
        Commands::Create { name, content } => {
            api.create_document(&name, content.unwrap_or_default().as_bytes())?
        }
        Commands::View { name, render } => api.view_document(&name, render)?,
        Commands::Update { name, content } => {
            let content = match content {
                Some(text) => text.into_bytes(),
                None => read_stdin()?,
            };
            api.update_document(&name, &content)?
        }
        Commands::Delete { name } => api.delete_document(&name)?,
        Commands::Rename { old, new } => api.rename_document(&old, &new)?,
        Commands::Duplicate { name } => api.duplicate_document(&name)?,
        Commands::History { name } => api.list_versions(&name)?,
        Commands::Show { name, version } => api.show_version(&name, version)?,
        Commands::Restore { name, version } => api.restore_version(&name, version)?,
        Commands::ClearHistory { name } => api.clear_versions(&name)?,
        Commands::Doctor => api.doctor()?,
    };
    Ok(result)
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("failed to read content from stdin")?;
    Ok(buffer)
}
