//! Export run configuration
//!
//! One [`ExportConfig`] drives a whole run: which categories to look for,
//! how their headings are worded, and how the CSV output is shaped. The
//! order of `categories` is significant twice over: it is the tie-break
//! priority when an id shows up in several categories (earlier wins) and
//! the primary sort order of the output.

use crate::error::ExportError;
use serde::Serialize;
use std::fmt;

/// Placeholder substituted with the category key in the marker template.
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Opaque key identifying one category (a retirement year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CategoryKey(pub u16);

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Categories to search, in priority order.
    pub categories: Vec<CategoryKey>,
    /// Heading marker template; `{key}` is replaced with the category key.
    pub marker_template: String,
    /// Field separator for the output.
    pub separator: char,
    /// First line of the output, written verbatim.
    pub header: String,
    /// Marker introducing the page-level "last update" line.
    pub metadata_marker: String,
    /// Prefix of the generated download filename.
    pub file_prefix: String,
    /// Heading level that opens and terminates a category section.
    pub heading_level: u8,
    /// Upper bound on forward sibling steps per matched heading.
    pub max_sibling_steps: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            categories: (2025..=2030).map(CategoryKey).collect(),
            marker_template: format!("retiring in {}", KEY_PLACEHOLDER),
            separator: ';',
            header: "EOL Year;Set Number;Set Name;Export Date".to_string(),
            metadata_marker: "Last update:".to_string(),
            file_prefix: "eol_export".to_string(),
            heading_level: 2,
            max_sibling_steps: 20,
        }
    }
}

impl ExportConfig {
    /// Marker string a heading must contain to open the given category.
    pub fn marker_for(&self, key: CategoryKey) -> String {
        self.marker_template
            .replace(KEY_PLACEHOLDER, &key.to_string())
    }

    /// Position of `key` in the configured order, if present.
    ///
    /// Lower rank wins ties in the master index and sorts earlier in the
    /// output.
    pub fn rank(&self, key: CategoryKey) -> Option<usize> {
        self.categories.iter().position(|&k| k == key)
    }

    /// Reject configurations the pipeline cannot run against.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.categories.is_empty() {
            return Err(ExportError::InvalidConfig(
                "category list is empty".to_string(),
            ));
        }
        for (position, key) in self.categories.iter().enumerate() {
            if self.categories[..position].contains(key) {
                return Err(ExportError::InvalidConfig(format!(
                    "duplicate category {}",
                    key
                )));
            }
        }
        if !self.marker_template.contains(KEY_PLACEHOLDER) {
            return Err(ExportError::InvalidConfig(format!(
                "marker template {:?} has no {} placeholder",
                self.marker_template, KEY_PLACEHOLDER
            )));
        }
        if self.header.is_empty() {
            return Err(ExportError::InvalidConfig("header is empty".to_string()));
        }
        if self.max_sibling_steps == 0 {
            return Err(ExportError::InvalidConfig(
                "sibling step bound is zero".to_string(),
            ));
        }
        Ok(())
    }
}
