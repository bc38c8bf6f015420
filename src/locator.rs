//! Section locator
//!
//! Finds, for every configured category, the tables that belong to it: a
//! heading of the configured level whose text contains the category marker
//! opens a section, and the tables of the following sibling blocks belong
//! to that section until the next heading of the same level or until the
//! sibling-step bound runs out. Headings are matched independently per
//! category, so several headings may feed the same category.

use crate::block::{descendants, subtree_text, BlockKind, DocumentTree};
use crate::config::{CategoryKey, ExportConfig};
use crate::diagnostics::{emit, DiagnosticSink, Severity};
use std::collections::BTreeMap;

/// Collect the tables associated with each configured category.
///
/// Categories without a matching heading get an empty table list and a
/// non-fatal `category not found` diagnostic.
pub fn locate_sections<T: DocumentTree>(
    tree: &T,
    config: &ExportConfig,
    sink: &mut dyn DiagnosticSink,
) -> BTreeMap<CategoryKey, Vec<T::Node>> {
    let headings: Vec<T::Node> = descendants(tree, tree.root())
        .into_iter()
        .filter(|&node| tree.kind(node) == BlockKind::Heading(config.heading_level))
        .collect();

    let mut sections = BTreeMap::new();
    for &category in &config.categories {
        let marker = config.marker_for(category);
        let mut tables = Vec::new();
        let mut found = false;

        for &heading in &headings {
            let heading_text = subtree_text(tree, heading);
            if !heading_text.contains(&marker) {
                continue;
            }
            found = true;
            emit(
                sink,
                Severity::Info,
                format!(
                    "category {}: heading matched: {}",
                    category,
                    heading_text.trim()
                ),
            );
            collect_section_tables(tree, config, heading, category, &mut tables, sink);
        }

        if !found {
            emit(
                sink,
                Severity::Warn,
                format!("category {}: no matching heading found", category),
            );
        }
        sections.insert(category, tables);
    }
    sections
}

/// Walk forward from `heading`, gathering tables until a heading of the
/// same level terminates the section or the step bound is exhausted.
fn collect_section_tables<T: DocumentTree>(
    tree: &T,
    config: &ExportConfig,
    heading: T::Node,
    category: CategoryKey,
    tables: &mut Vec<T::Node>,
    sink: &mut dyn DiagnosticSink,
) {
    let mut next = tree.next_sibling(heading);
    let mut steps = 0usize;

    while let Some(node) = next {
        if steps >= config.max_sibling_steps {
            // Malformed section structure: no terminating heading in reach.
            emit(
                sink,
                Severity::Warn,
                format!(
                    "category {}: sibling scan stopped after {} steps without a terminating heading",
                    category, config.max_sibling_steps
                ),
            );
            break;
        }
        steps += 1;

        if tree.kind(node) == BlockKind::Heading(config.heading_level) {
            // The next section starts here; its tables are not ours.
            break;
        }

        if tree.kind(node) == BlockKind::Table {
            tables.push(node);
        }
        for child in descendants(tree, node) {
            if tree.kind(child) == BlockKind::Table {
                tracing::debug!("category {}: table found in section", category);
                tables.push(child);
            }
        }

        next = tree.next_sibling(node);
    }
}

/// Extract the page-level metadata line, if present.
///
/// Returns the trimmed text following the configured metadata marker in the
/// first paragraph or emphasis block that contains it.
pub fn locate_metadata<T: DocumentTree>(tree: &T, config: &ExportConfig) -> Option<String> {
    for node in descendants(tree, tree.root()) {
        match tree.kind(node) {
            BlockKind::Paragraph | BlockKind::Emphasis => {}
            _ => continue,
        }
        let text = subtree_text(tree, node);
        if let Some(position) = text.find(&config.metadata_marker) {
            let rest = text[position + config.metadata_marker.len()..].trim();
            return Some(rest.to_string());
        }
    }
    None
}
