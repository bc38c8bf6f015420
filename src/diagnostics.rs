//! Structured diagnostics and the bounded event log
//!
//! The pipeline reports what it finds through an injected [`DiagnosticSink`];
//! it never depends on the sink doing anything (fire-and-forget). Every
//! event is additionally mirrored to `tracing`, so a subscriber-equipped
//! host gets console output for free.
//!
//! [`EventLog`] is the bundled sink: a capacity-bounded, newest-first ring
//! buffer with plain-text and JSON dumps, meant to back a "show log" button
//! in the host UI.

use chrono::Local;
use serde::Serialize;
use std::collections::VecDeque;

/// Default capacity of the [`EventLog`] ring buffer.
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Severity of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
    /// A completed step worth surfacing to the user.
    Success,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Success => "success",
        };
        write!(f, "{}", tag)
    }
}

/// One structured event emitted by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Consumer of pipeline diagnostics.
pub trait DiagnosticSink {
    /// Receive one event. Must not fail; the pipeline ignores the sink's fate.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Sink that drops every event.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A logged event with its arrival timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Local time the event arrived, `DD.MM.YYYY, HH:MM:SS`.
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

/// Bounded, newest-first event log.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    /// Log with the default capacity of [`DEFAULT_LOG_CAPACITY`] entries.
    pub fn new() -> Self {
        EventLog::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Log keeping at most `capacity` entries; the oldest are dropped first.
    pub fn with_capacity(capacity: usize) -> Self {
        EventLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Human-readable dump, newest first.
    pub fn formatted(&self) -> String {
        if self.entries.is_empty() {
            return "log is empty".to_string();
        }
        let mut out = format!("log ({} entries):\n", self.entries.len());
        for entry in &self.entries {
            out.push_str(&format!(
                "[{}] {}\n{}\n",
                entry.severity, entry.timestamp, entry.message
            ));
        }
        out
    }

    /// JSON dump of the entries, newest first.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        EventLog::new()
    }
}

impl DiagnosticSink for EventLog {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.entries.push_front(LogEntry {
            timestamp: Local::now().format("%d.%m.%Y, %H:%M:%S").to_string(),
            severity: diagnostic.severity,
            message: diagnostic.message,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }
}

/// Forward one event to the sink and mirror it to `tracing`.
pub(crate) fn emit(sink: &mut dyn DiagnosticSink, severity: Severity, message: String) {
    match severity {
        Severity::Info | Severity::Success => tracing::info!("{}", message),
        Severity::Warn => tracing::warn!("{}", message),
        Severity::Error => tracing::error!("{}", message),
    }
    sink.emit(Diagnostic { severity, message });
}
