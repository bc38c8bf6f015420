//! Read-only document tree capability and an in-memory block tree
//!
//! The extraction pipeline never talks to a concrete rendering environment.
//! It sees the page through the [`DocumentTree`] trait: a node handle, a
//! block kind, the node's own text, its children, and its next sibling.
//! Host environments implement the trait with a thin adapter; [`BlockTree`]
//! is the bundled arena-backed implementation used by adapters that already
//! hold an owned snapshot of the page, and by the test suite.
//!
//! The pipeline only ever reads through `&T`, so the tree is never mutated
//! by a run.

/// The kind of a content block.
///
/// The set is deliberately small: it covers exactly the distinctions the
/// pipeline needs (category headings, tables and their rows/cells, link and
/// emphasis inlines, plain paragraphs). Anything else maps to `Container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A section heading with its level (an `<h2>` maps to `Heading(2)`).
    Heading(u8),
    /// A plain text block.
    Paragraph,
    /// A data table.
    Table,
    /// A table header row; never parsed for records.
    HeaderRow,
    /// A table body row.
    Row,
    /// A single table cell.
    Cell,
    /// A link inline; preferred over the enclosing cell text.
    Link,
    /// An emphasized inline (`<strong>`, `<em>`).
    Emphasis,
    /// Any structural block with no special meaning to the pipeline.
    Container,
}

/// Minimal read-only capability over a rendered document.
///
/// `Node` is a cheap copyable handle. Implementations must return children
/// in document order and report the next sibling within the same parent.
pub trait DocumentTree {
    /// Handle to a node in the tree.
    type Node: Copy + PartialEq;

    /// The root node of the document.
    fn root(&self) -> Self::Node;

    /// Kind of the given node.
    fn kind(&self, node: Self::Node) -> BlockKind;

    /// Text owned directly by the node, excluding descendants.
    fn own_text(&self, node: Self::Node) -> &str;

    /// Children of the node, in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Next sibling under the same parent, if any.
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;
}

/// All descendants of `node` in preorder, excluding `node` itself.
pub fn descendants<T: DocumentTree>(tree: &T, node: T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut stack: Vec<T::Node> = tree.children(node);
    stack.reverse();
    while let Some(current) = stack.pop() {
        out.push(current);
        let mut kids = tree.children(current);
        kids.reverse();
        stack.extend(kids);
    }
    out
}

/// Concatenated text of `node` and its whole subtree, in document order.
///
/// Pieces are concatenated without an injected separator, so whatever
/// spacing the source carried is preserved verbatim.
pub fn subtree_text<T: DocumentTree>(tree: &T, node: T::Node) -> String {
    let mut text = String::from(tree.own_text(node));
    for child in descendants(tree, node) {
        text.push_str(tree.own_text(child));
    }
    text
}

/// Handle into a [`BlockTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

#[derive(Debug, Clone)]
struct BlockData {
    kind: BlockKind,
    text: String,
    children: Vec<BlockId>,
    next_sibling: Option<BlockId>,
}

/// Arena-backed in-memory document tree.
///
/// Nodes are appended with [`BlockTree::push`]; sibling links are maintained
/// automatically. The root is a text-less [`BlockKind::Container`].
#[derive(Debug, Clone)]
pub struct BlockTree {
    nodes: Vec<BlockData>,
}

impl BlockTree {
    /// Create a tree holding only the root container.
    pub fn new() -> Self {
        BlockTree {
            nodes: vec![BlockData {
                kind: BlockKind::Container,
                text: String::new(),
                children: Vec::new(),
                next_sibling: None,
            }],
        }
    }

    /// Append a child under `parent` and return its handle.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this tree.
    pub fn push(&mut self, parent: BlockId, kind: BlockKind, text: &str) -> BlockId {
        let id = BlockId(self.nodes.len());
        self.nodes.push(BlockData {
            kind,
            text: text.to_string(),
            children: Vec::new(),
            next_sibling: None,
        });
        let previous = self.nodes[parent.0].children.last().copied();
        if let Some(previous) = previous {
            self.nodes[previous.0].next_sibling = Some(id);
        }
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds only the root container.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for BlockTree {
    fn default() -> Self {
        BlockTree::new()
    }
}

impl DocumentTree for BlockTree {
    type Node = BlockId;

    fn root(&self) -> BlockId {
        BlockId(0)
    }

    fn kind(&self, node: BlockId) -> BlockKind {
        self.nodes[node.0].kind
    }

    fn own_text(&self, node: BlockId) -> &str {
        &self.nodes[node.0].text
    }

    fn children(&self, node: BlockId) -> Vec<BlockId> {
        self.nodes[node.0].children.clone()
    }

    fn next_sibling(&self, node: BlockId) -> Option<BlockId> {
        self.nodes[node.0].next_sibling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_links_siblings_in_order() {
        let mut tree = BlockTree::new();
        let root = tree.root();
        let a = tree.push(root, BlockKind::Paragraph, "a");
        let b = tree.push(root, BlockKind::Paragraph, "b");
        let c = tree.push(root, BlockKind::Paragraph, "c");

        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.next_sibling(b), Some(c));
        assert_eq!(tree.next_sibling(c), None);
        assert_eq!(tree.children(root), vec![a, b, c]);
    }

    #[test]
    fn children_of_different_parents_are_not_siblings() {
        let mut tree = BlockTree::new();
        let root = tree.root();
        let outer = tree.push(root, BlockKind::Container, "");
        let inner = tree.push(outer, BlockKind::Paragraph, "inner");
        let after = tree.push(root, BlockKind::Paragraph, "after");

        assert_eq!(tree.next_sibling(inner), None);
        assert_eq!(tree.next_sibling(outer), Some(after));
    }

    #[test]
    fn descendants_are_preorder() {
        let mut tree = BlockTree::new();
        let root = tree.root();
        let table = tree.push(root, BlockKind::Table, "");
        let row = tree.push(table, BlockKind::Row, "");
        let cell = tree.push(row, BlockKind::Cell, "42 Things");
        let para = tree.push(root, BlockKind::Paragraph, "tail");

        assert_eq!(descendants(&tree, root), vec![table, row, cell, para]);
        assert_eq!(descendants(&tree, table), vec![row, cell]);
        assert!(descendants(&tree, cell).is_empty());
    }

    #[test]
    fn subtree_text_concatenates_without_separator() {
        let mut tree = BlockTree::new();
        let root = tree.root();
        let heading = tree.push(root, BlockKind::Heading(2), "Sets retiring in ");
        tree.push(heading, BlockKind::Emphasis, "2025");

        assert_eq!(subtree_text(&tree, heading), "Sets retiring in 2025");
    }
}
