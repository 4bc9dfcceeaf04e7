//! Document name validation.
//!
//! A valid document name:
//! - Ends in one of the allowed extensions (`.txt`, `.md`), taken as the
//!   substring from the final `.` onward
//! - Has a base (the name with its extension stripped) that is non-empty
//!   after trimming whitespace
//! - Contains no path separators, so it always names a single file directly
//!   under the documents root
//!
//! Whether a name is *taken* depends on the live document set and is answered
//! by [`crate::store::doc_store::DocStore::exists`].

use crate::error::{QuireError, Result};
use crate::model::DocumentKind;

/// Suffix appended to a document's base name by `duplicate`.
pub const COPY_SUFFIX: &str = "_copy";

/// Splits `name` into `(base, extension)` at the final `.`.
///
/// The extension keeps its leading dot. Names without a dot return an empty
/// extension.
///
/// ```
/// use quireapp::names::split_name;
///
/// assert_eq!(split_name("notes.txt"), ("notes", ".txt"));
/// assert_eq!(split_name("v1.2.md"), ("v1.2", ".md"));
/// assert_eq!(split_name("README"), ("README", ""));
/// ```
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Checks `name` against the naming rules, reporting which rule failed.
///
/// An empty base wins over a bad extension, so `"   "` and `".md"` both
/// report [`QuireError::EmptyName`].
pub fn validate_name(name: &str) -> Result<DocumentKind> {
    let (base, ext) = split_name(name);
    if base.trim().is_empty() {
        return Err(QuireError::EmptyName);
    }
    if name.contains(['/', '\\']) || name.contains('\0') {
        return Err(QuireError::InvalidName(name.to_string()));
    }
    DocumentKind::from_extension(ext).ok_or_else(|| QuireError::InvalidName(name.to_string()))
}

/// True iff `name` has an allowed extension and a non-blank base.
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// The name `duplicate` gives a copy of `name`: `{base}_copy{ext}`.
///
/// ```
/// use quireapp::names::copy_name;
///
/// assert_eq!(copy_name("notes.txt"), "notes_copy.txt");
/// assert_eq!(copy_name("notes_copy.txt"), "notes_copy_copy.txt");
/// ```
pub fn copy_name(name: &str) -> String {
    let (base, ext) = split_name(name);
    format!("{}{}{}", base, COPY_SUFFIX, ext)
}
