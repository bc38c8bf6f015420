//! Error types for the export pipeline

use std::fmt;

/// Errors that can occur during an export run
///
/// Skipped rows, missing categories, and empty results are not errors; they
/// are diagnosed and the run continues (or returns an empty outcome). Only a
/// rejected configuration or a failing host tree surfaces here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The configuration was rejected before any tree access.
    InvalidConfig(String),
    /// The host tree adapter panicked during the walk.
    TreeWalk(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            ExportError::TreeWalk(msg) => write!(f, "document tree walk failed: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}
