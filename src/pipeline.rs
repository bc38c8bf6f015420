//! Pipeline driver
//!
//! Sequences the extraction phases (locate sections, extract each
//! category, merge into the master index) and serializes the result. The
//! driver owns the failure boundary: a panicking tree adapter becomes an
//! [`ExportError::TreeWalk`], and a run that finds nothing becomes the
//! distinct [`ExportOutcome::Empty`] instead of a header-only file.

use crate::block::DocumentTree;
use crate::config::{CategoryKey, ExportConfig};
use crate::csv::{export_filename, export_timestamp, render_csv};
use crate::diagnostics::{emit, DiagnosticSink, Severity};
use crate::error::ExportError;
use crate::extract::extract_category;
use crate::index::build_master_index;
use crate::locator::{locate_metadata, locate_sections};
use crate::record::MasterIndex;
use chrono::{Local, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Everything the extraction phase produces; serialization-independent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// Cross-category index, earliest configured category per id.
    pub master: MasterIndex,
    /// Record count per configured category.
    pub per_category_counts: BTreeMap<CategoryKey, usize>,
    /// Number of distinct ids in the master index.
    pub total: usize,
    /// The page's "last update" line, when present.
    pub metadata_line: Option<String>,
}

/// Rendered output handed to the file-delivery collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    /// Delimited text, header line first.
    pub content: String,
    /// Suggested download filename, export instant included.
    pub filename: String,
}

/// Outcome of a full export run.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// Records were found and rendered.
    Completed {
        result: ExtractionResult,
        export: CsvExport,
    },
    /// The run finished but found no records; nothing was rendered.
    Empty { result: ExtractionResult },
}

/// Run the extraction phase: locate, extract per category, merge.
///
/// Pure with respect to the tree; repeated calls against an unchanged tree
/// return equal results. Panics from the tree adapter are caught here and
/// returned as [`ExportError::TreeWalk`].
pub fn extract<T: DocumentTree>(
    tree: &T,
    config: &ExportConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<ExtractionResult, ExportError> {
    config.validate()?;

    match catch_unwind(AssertUnwindSafe(|| run_extraction(tree, config, sink))) {
        Ok(result) => Ok(result),
        Err(payload) => {
            let message = panic_message(payload);
            emit(
                sink,
                Severity::Error,
                format!("document tree walk failed: {}", message),
            );
            Err(ExportError::TreeWalk(message))
        }
    }
}

fn run_extraction<T: DocumentTree>(
    tree: &T,
    config: &ExportConfig,
    sink: &mut dyn DiagnosticSink,
) -> ExtractionResult {
    let sections = locate_sections(tree, config, sink);

    let mut per_category = BTreeMap::new();
    let mut per_category_counts = BTreeMap::new();
    for &category in &config.categories {
        let tables = sections.get(&category).map(Vec::as_slice).unwrap_or(&[]);
        let set = extract_category(tree, tables, category);
        emit(
            sink,
            Severity::Info,
            format!("category {}: {} records", category, set.len()),
        );
        per_category_counts.insert(category, set.len());
        per_category.insert(category, set);
    }

    let master = build_master_index(&per_category, config);
    let total = master.len();
    let metadata_line = locate_metadata(tree, config);
    emit(
        sink,
        Severity::Success,
        format!(
            "extraction complete: {} records across {} categories",
            total,
            config.categories.len()
        ),
    );

    ExtractionResult {
        master,
        per_category_counts,
        total,
        metadata_line,
    }
}

/// Run the full pipeline and render the CSV export.
///
/// ```no_run
/// use eolcsv::{run_export, BlockTree, EventLog, ExportConfig, ExportOutcome};
///
/// let tree = BlockTree::new();
/// let mut log = EventLog::new();
/// match run_export(&tree, &ExportConfig::default(), &mut log) {
///     Ok(ExportOutcome::Completed { export, .. }) => println!("{}", export.filename),
///     Ok(ExportOutcome::Empty { .. }) => println!("nothing to export"),
///     Err(error) => eprintln!("{}", error),
/// }
/// ```
pub fn run_export<T: DocumentTree>(
    tree: &T,
    config: &ExportConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<ExportOutcome, ExportError> {
    let result = extract(tree, config, sink)?;

    if result.total == 0 {
        emit(
            sink,
            Severity::Warn,
            "no records extracted; export skipped".to_string(),
        );
        return Ok(ExportOutcome::Empty { result });
    }

    let now = Local::now();
    let stamp = export_timestamp(now);
    let content = render_csv(&result.master, config, &stamp);
    let filename = export_filename(&config.file_prefix, now.with_timezone(&Utc));
    emit(
        sink,
        Severity::Success,
        format!("export ready: {} ({} records)", filename, result.total),
    );

    Ok(ExportOutcome::Completed {
        result,
        export: CsvExport { content, filename },
    })
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
