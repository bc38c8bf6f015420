//! Shared fixtures: build page trees the way the target site renders them.

use eolcsv::{BlockId, BlockKind, BlockTree, DocumentTree};

/// Append a category heading: `Every set retiring in <year>`.
pub fn add_heading(tree: &mut BlockTree, year: u16) -> BlockId {
    let root = tree.root();
    tree.push(
        root,
        BlockKind::Heading(2),
        &format!("Every set retiring in {}", year),
    )
}

/// Append a figure-wrapped table with a header row and one linked cell per
/// body row, mirroring the page's table markup.
pub fn add_table(tree: &mut BlockTree, rows: &[&str]) -> BlockId {
    let root = tree.root();
    let figure = tree.push(root, BlockKind::Container, "");
    let table = tree.push(figure, BlockKind::Table, "");
    let header = tree.push(table, BlockKind::HeaderRow, "");
    tree.push(header, BlockKind::Cell, "Set");
    for text in rows {
        let row = tree.push(table, BlockKind::Row, "");
        let cell = tree.push(row, BlockKind::Cell, "");
        tree.push(cell, BlockKind::Link, text);
    }
    table
}

/// A page with one heading-plus-table section per entry.
pub fn page(sections: &[(u16, &[&str])]) -> BlockTree {
    let mut tree = BlockTree::new();
    for (year, rows) in sections {
        add_heading(&mut tree, *year);
        add_table(&mut tree, rows);
    }
    tree
}
