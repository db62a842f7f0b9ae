pub mod extract;
pub mod parser;
pub mod traverse;

/// Rendered in place of a missing `name` attribute.
pub const UNNAMED: &str = "(unnamed)";

/// Node classification, decided once when the XML is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Any grouping element: document root, sections, categories
    Category,
    /// A product or spare part
    Item,
    /// The element that wraps an item's spare parts
    PartWrapper,
}

/// Owned catalog tree node. Children are held by value, so the tree
/// cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogNode {
    pub tag: String,
    pub name: Option<String>,
    pub kind: NodeKind,
    pub type_marker: Option<String>,
    pub children: Vec<CatalogNode>,
}

impl CatalogNode {
    pub fn new(tag: impl Into<String>, kind: NodeKind, children: Vec<CatalogNode>) -> Self {
        Self {
            tag: tag.into(),
            name: None,
            kind,
            type_marker: None,
            children,
        }
    }

    pub fn category(name: impl Into<String>, children: Vec<CatalogNode>) -> Self {
        Self::new("category", NodeKind::Category, children).named(name)
    }

    pub fn item(name: impl Into<String>) -> Self {
        Self::new("item", NodeKind::Item, Vec::new()).named(name)
    }

    pub fn part_wrapper(children: Vec<CatalogNode>) -> Self {
        Self::new("parts", NodeKind::PartWrapper, children)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn marked(mut self, marker: impl Into<String>) -> Self {
        self.type_marker = Some(marker.into());
        self
    }

    pub fn with_children(mut self, children: Vec<CatalogNode>) -> Self {
        self.children = children;
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn is_category(&self) -> bool {
        self.kind == NodeKind::Category
    }

    pub fn is_item(&self) -> bool {
        self.kind == NodeKind::Item
    }

    /// Child categories, in document order.
    pub fn categories(&self) -> impl Iterator<Item = &CatalogNode> {
        self.children.iter().filter(|c| c.is_category())
    }

    /// First direct child with the given element name.
    pub fn child(&self, tag: &str) -> Option<&CatalogNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }
}

/// A parsed catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub root: CatalogNode,
}

impl Catalog {
    pub fn new(root: CatalogNode) -> Self {
        Self { root }
    }

    /// Top-level section of the document, e.g. `items`.
    pub fn section(&self, tag: &str) -> Option<&CatalogNode> {
        self.root.child(tag)
    }
}
