//! Category extractor
//!
//! Turns the tables of one category into a [`CategoryRecordSet`]. Only body
//! rows are considered; the first cell of each row carries the record text,
//! with a contained link's text taking precedence over the cell's own text.
//! Rows that do not match the record grammar are skipped.

use crate::block::{descendants, subtree_text, BlockKind, DocumentTree};
use crate::config::CategoryKey;
use crate::grammar::parse_record;
use crate::record::CategoryRecordSet;

/// Parse every body row of `tables` into the category's record set.
///
/// The first occurrence of an id within the category wins; later duplicates
/// are dropped silently. Skipped rows are traced at debug level, not fatal.
pub fn extract_category<T: DocumentTree>(
    tree: &T,
    tables: &[T::Node],
    category: CategoryKey,
) -> CategoryRecordSet {
    let mut set = CategoryRecordSet::new(category);

    for &table in tables {
        for row in descendants(tree, table) {
            if tree.kind(row) != BlockKind::Row {
                continue;
            }
            let Some(text) = first_cell_text(tree, row) else {
                continue;
            };
            match parse_record(&text) {
                Some(fields) => {
                    let id = fields.id.clone();
                    if !set.insert_first(fields) {
                        tracing::debug!("category {}: duplicate id {} dropped", category, id);
                    }
                }
                None => {
                    tracing::debug!("category {}: no record pattern in {:?}", category, text);
                }
            }
        }
    }
    set
}

/// Text of the row's first cell: the first contained link's text if there
/// is one, the cell's own subtree text otherwise.
fn first_cell_text<T: DocumentTree>(tree: &T, row: T::Node) -> Option<String> {
    let cell = descendants(tree, row)
        .into_iter()
        .find(|&node| tree.kind(node) == BlockKind::Cell)?;

    let link = descendants(tree, cell)
        .into_iter()
        .find(|&node| tree.kind(node) == BlockKind::Link);

    let text = match link {
        Some(link) => subtree_text(tree, link),
        None => subtree_text(tree, cell),
    };
    Some(text.trim().to_string())
}
