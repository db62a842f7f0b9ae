use std::path::Path;

use roxmltree::{Document, Node};

use crate::catalog::{Catalog, CatalogNode, NodeKind};
use crate::config::Schema;
use crate::error::{CatalogError, Result};

/// Parse a catalog XML document into an owned tree.
pub fn parse_catalog(xml: &str, schema: &Schema) -> Result<Catalog> {
    let document = Document::parse(xml)?;
    let root = convert_element(document.root_element(), schema);
    log::debug!("Parsed catalog: {} nodes under <{}>", root.node_count(), root.tag);
    Ok(Catalog::new(root))
}

/// Read and parse the catalog file at `path`.
pub fn load_catalog(path: &Path, schema: &Schema) -> Result<Catalog> {
    let xml = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_catalog(&xml, schema)
}

fn classify(tag: &str, schema: &Schema) -> NodeKind {
    if tag == schema.item_tag {
        NodeKind::Item
    } else if tag == schema.parts_tag {
        NodeKind::PartWrapper
    } else {
        NodeKind::Category
    }
}

fn convert_element(el: Node<'_, '_>, schema: &Schema) -> CatalogNode {
    let tag = el.tag_name().name();

    // Text, comments and processing instructions carry nothing we render
    let children = el
        .children()
        .filter(|n| n.is_element())
        .map(|child| convert_element(child, schema))
        .collect();

    CatalogNode {
        tag: tag.to_string(),
        name: el.attribute(schema.name_attr.as_str()).map(str::to_string),
        kind: classify(tag, schema),
        type_marker: el.attribute(schema.type_attr.as_str()).map(str::to_string),
        children,
    }
}
