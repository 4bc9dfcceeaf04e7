use super::commands::CommandView;
use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use quireapp::commands::{CmdMessage, CmdResult, MessageLevel};
use quireapp::model::{DocumentSummary, HistoryEntry};
use std::io::Write;
use timeago::Formatter;

const NAME_WIDTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    Json,
}

pub(super) fn print_result(result: &CmdResult, view: CommandView, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    match view {
        CommandView::Listing => print_documents(&result.listed_documents),
        CommandView::Document => {
            if let Some(rendered) = &result.rendered {
                write_body(rendered.body().as_bytes())?;
            } else if let Some(document) = result.affected_documents.first() {
                write_body(&document.content)?;
            }
        }
        CommandView::History => print_entries(&result.entries),
        CommandView::Version => {
            if let Some(entry) = result.entries.first() {
                write_body(&entry.content)?;
            }
        }
        CommandView::Messages => {}
    }

    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_documents(documents: &[DocumentSummary]) {
    for doc in documents {
        let versions = match doc.versions {
            0 => String::new(),
            1 => "1 version".to_string(),
            n => format!("{} versions", n),
        };
        println!(
            "{:<width$} {:>8} {:>12}  {}",
            doc.name.bold(),
            format_size(doc.size),
            versions,
            format_time_ago(doc.modified_at).dimmed(),
            width = NAME_WIDTH
        );
    }
}

fn print_entries(entries: &[HistoryEntry]) {
    for entry in entries {
        println!(
            "{:>6} {:>8}  {}",
            format!("v{}", entry.version).yellow(),
            format_size(entry.content.len()),
            format_time_ago(entry.saved_at).dimmed()
        );
    }
}

/// Document bodies go out unchanged, plus a newline when they lack one.
fn write_body(content: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content)?;
    if !content.is_empty() && !content.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn format_time_ago(timestamp: Option<DateTime<Utc>>) -> String {
    let Some(timestamp) = timestamp else {
        return "-".to_string();
    };
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
