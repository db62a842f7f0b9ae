//! Flat views over a subtree: item counts, item names, and items with
//! their spare parts. Hierarchy is ignored; every item counts.

use serde::Serialize;

use crate::catalog::{CatalogNode, NodeKind};

/// An item and the spare parts attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub name: String,
    /// Every item anywhere below the item's first part wrapper, in
    /// document order. `None` when the item has no part wrapper at all.
    pub parts: Option<Vec<ItemRecord>>,
}

impl ItemRecord {
    pub fn from_node(item: &CatalogNode) -> Self {
        // Only the first wrapper counts; later ones are ignored
        let parts = item
            .children
            .iter()
            .find(|c| c.kind == NodeKind::PartWrapper)
            .map(item_records);

        Self {
            name: item.display_name().to_string(),
            parts,
        }
    }

    /// Names of this record's parts, in document order.
    pub fn part_names(&self) -> Vec<String> {
        self.parts
            .iter()
            .flatten()
            .map(|part| part.name.clone())
            .collect()
    }
}

/// Number of item nodes strictly below `node`, at any depth.
pub fn count_items(node: &CatalogNode) -> usize {
    node.children
        .iter()
        .map(|c| usize::from(c.is_item()) + count_items(c))
        .sum()
}

/// Names of every item strictly below `node`, in document order.
pub fn item_names(node: &CatalogNode) -> Vec<String> {
    let mut names = Vec::new();
    collect_item_names(node, &mut names);
    names
}

pub(crate) fn collect_item_names(node: &CatalogNode, names: &mut Vec<String>) {
    for child in &node.children {
        if child.is_item() {
            names.push(child.display_name().to_string());
        }
        collect_item_names(child, names);
    }
}

/// Every item below `node` at any depth, as records in document order.
pub fn item_records(node: &CatalogNode) -> Vec<ItemRecord> {
    items(node).into_iter().map(ItemRecord::from_node).collect()
}

/// Every item at any depth, in document order, borrowed from the tree.
pub fn items(node: &CatalogNode) -> Vec<&CatalogNode> {
    let mut found = Vec::new();
    collect_items(node, &mut found);
    found
}

fn collect_items<'a>(node: &'a CatalogNode, found: &mut Vec<&'a CatalogNode>) {
    for child in &node.children {
        if child.is_item() {
            found.push(child);
        }
        collect_items(child, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_depth_tree() -> CatalogNode {
        CatalogNode::new(
            "items",
            NodeKind::Category,
            vec![
                CatalogNode::item("Mower").with_children(vec![CatalogNode::part_wrapper(vec![
                    CatalogNode::item("Blade"),
                    CatalogNode::item("Engine").with_children(vec![CatalogNode::part_wrapper(
                        vec![CatalogNode::item("Spark plug")],
                    )]),
                ])]),
                CatalogNode::category("Hand tools", vec![CatalogNode::item("Rake")]),
            ],
        )
    }

    #[test]
    fn counts_items_at_every_depth() {
        assert_eq!(count_items(&mixed_depth_tree()), 5);
    }

    #[test]
    fn names_follow_document_order() {
        assert_eq!(
            item_names(&mixed_depth_tree()),
            ["Mower", "Blade", "Engine", "Spark plug", "Rake"]
        );
    }

    #[test]
    fn empty_subtree() {
        let node = CatalogNode::new("items", NodeKind::Category, Vec::new());
        assert_eq!(count_items(&node), 0);
        assert!(item_names(&node).is_empty());
        assert!(item_records(&node).is_empty());
    }

    #[test]
    fn records_cover_every_item() {
        let records = item_records(&mixed_depth_tree());
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Mower", "Blade", "Engine", "Spark plug", "Rake"]);

        let mower = &records[0];
        let parts = mower.parts.as_ref().unwrap();
        assert_eq!(parts[0].name, "Blade");
        assert_eq!(parts[0].parts, None);
        assert_eq!(parts[1].part_names(), ["Spark plug"]);
        assert_eq!(mower.part_names(), ["Blade", "Engine", "Spark plug"]);

        assert_eq!(records[4].parts, None);
    }

    #[test]
    fn items_nested_in_a_part_are_parts_too() {
        let item = CatalogNode::item("P").with_children(vec![CatalogNode::part_wrapper(vec![
            CatalogNode::item("A").with_children(vec![CatalogNode::item("B")]),
        ])]);
        assert_eq!(ItemRecord::from_node(&item).part_names(), ["A", "B"]);
    }

    #[test]
    fn only_first_wrapper_is_read() {
        let item = CatalogNode::item("P").with_children(vec![
            CatalogNode::part_wrapper(vec![CatalogNode::item("A")]),
            CatalogNode::part_wrapper(vec![CatalogNode::item("Z")]),
        ]);
        assert_eq!(ItemRecord::from_node(&item).part_names(), ["A"]);
    }

    #[test]
    fn empty_wrapper_is_some() {
        let item = CatalogNode::item("Saw").with_children(vec![CatalogNode::part_wrapper(Vec::new())]);
        let record = ItemRecord::from_node(&item);
        assert_eq!(record.parts, Some(Vec::new()));
        assert!(record.part_names().is_empty());
    }

    #[test]
    fn unnamed_items_keep_their_slot() {
        let node = CatalogNode::new(
            "items",
            NodeKind::Category,
            vec![
                CatalogNode::new("item", NodeKind::Item, Vec::new()),
                CatalogNode::item("B"),
            ],
        );
        assert_eq!(item_names(&node), [crate::catalog::UNNAMED, "B"]);
    }

    #[test]
    fn borrowed_items_in_order() {
        let tree = mixed_depth_tree();
        let found: Vec<&str> = items(&tree).iter().map(|n| n.display_name()).collect();
        assert_eq!(found, ["Mower", "Blade", "Engine", "Spark plug", "Rake"]);
    }
}
