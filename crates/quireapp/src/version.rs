//! # Version Numbering
//!
//! Every history entry is stored in a file named `{version}_{document}`, e.g.
//! `3_notes.txt`. The version tag is a positive integer; the next tag for a
//! document is one more than the highest tag currently on disk.
//!
//! Tags are always compared as parsed integers, never by the lexical order of
//! a directory listing (`10_a.txt` sorts before `9_a.txt` as a string).

use crate::error::{QuireError, Result};

/// Separator between the version tag and the document name in an entry file name.
pub const ENTRY_SEPARATOR: char = '_';

/// `max(existing) + 1`, or `1` when there are no existing tags.
///
/// `None` when the highest tag is already `u64::MAX`.
pub fn next_version<I>(existing: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    match existing.into_iter().max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// File name of the entry holding `version` of `document`.
pub fn entry_file_name(version: u64, document: &str) -> String {
    format!("{}{}{}", version, ENTRY_SEPARATOR, document)
}

/// Parses an entry file name into its `(version, document)` parts.
///
/// Fails with [`QuireError::MalformedHistoryEntry`] when there is no
/// separator, when the prefix is not a positive decimal integer, or when the
/// document part is empty.
pub fn parse_entry_name(entry_name: &str) -> Result<(u64, &str)> {
    let malformed = || QuireError::MalformedHistoryEntry(entry_name.to_string());

    let (tag, document) = entry_name.split_once(ENTRY_SEPARATOR).ok_or_else(malformed)?;
    if tag.is_empty() || document.is_empty() || !tag.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let version: u64 = tag.parse().map_err(|_| malformed())?;
    if version == 0 {
        return Err(malformed());
    }
    Ok((version, document))
}

/// The version tag of an entry file name.
pub fn version_from_entry_name(entry_name: &str) -> Result<u64> {
    parse_entry_name(entry_name).map(|(version, _)| version)
}
