//! # eolcsv
//!
//! Extracts end-of-life (EOL) tables from a rendered page and exports them
//! as CSV. The page is seen as a tree of content blocks: headings of the
//! form "retiring in `<year>`" open category sections, the tables that
//! follow hold one record per row ("`<set number>` `<set name>`"). Records
//! are deduplicated within a category and across categories (the earliest
//! configured category wins), sorted deterministically, and rendered as
//! delimited text together with a suggested download filename.
//!
//! The crate does no I/O: the host supplies the tree through the
//! [`DocumentTree`] capability and takes the rendered blob away. Progress
//! and anomalies are reported through an injected [`DiagnosticSink`];
//! [`EventLog`] is a bundled ring-buffer sink for host UIs.

pub mod block;
pub mod config;
pub mod csv;
pub mod diagnostics;
pub mod extract;
pub mod grammar;
pub mod index;
pub mod locator;
pub mod pipeline;
pub mod record;

mod error;

pub use block::{BlockId, BlockKind, BlockTree, DocumentTree};
pub use config::{CategoryKey, ExportConfig, KEY_PLACEHOLDER};
pub use csv::{escape_label, export_filename, export_timestamp, render_csv};
pub use diagnostics::{
    Diagnostic, DiagnosticSink, EventLog, LogEntry, NullSink, Severity, DEFAULT_LOG_CAPACITY,
};
pub use error::ExportError;
pub use extract::extract_category;
pub use grammar::{parse_record, RecordFields};
pub use index::build_master_index;
pub use locator::{locate_metadata, locate_sections};
pub use pipeline::{extract, run_export, CsvExport, ExportOutcome, ExtractionResult};
pub use record::{CandidateRecord, CategoryRecordSet, MasterEntry, MasterIndex};
