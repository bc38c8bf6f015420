//! Record grammar for raw table cells
//!
//! A cell holds a record when its trimmed text starts with a run of digits,
//! followed by whitespace, followed by a non-empty label. Everything else is
//! a non-match, not an error; the caller skips the row.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored cell grammar: identifier digits, whitespace, label remainder.
static RECORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s+(.+)$").unwrap());

/// Fields parsed out of a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    /// The leading digit run, kept as a string (ids may carry leading zeros).
    pub id: String,
    /// The trimmed remainder; case and inner whitespace preserved verbatim.
    pub label: String,
}

/// Parse a raw cell text into record fields.
///
/// Returns `None` for any text that does not match the grammar. No
/// normalization is applied beyond trimming the outer whitespace.
pub fn parse_record(text: &str) -> Option<RecordFields> {
    let captures = RECORD_REGEX.captures(text.trim())?;
    Some(RecordFields {
        id: captures[1].to_string(),
        label: captures[2].trim().to_string(),
    })
}
