//! Spare-part category traversal.
//!
//! Walks the category tree depth-first in document order and, for every
//! category whose type marker equals the configured sentinel, records the
//! items found anywhere below it together with its ancestor chain.
//!
//! The ancestor chain is the list of category names from the traversal
//! root down to the marked category's parent, with the root dropped. A
//! marked category directly below the root therefore has no parents.

use serde::Serialize;

use crate::catalog::extract::collect_item_names;
use crate::catalog::CatalogNode;
use crate::config::{DescendPolicy, Schema};

/// One part-bearing category found by the traverser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparePartsResult {
    pub items: Vec<String>,
    pub parents: Vec<String>,
}

pub struct PartsTraverser<'a> {
    sentinel: &'a str,
    policy: DescendPolicy,
}

impl<'a> PartsTraverser<'a> {
    pub fn new(sentinel: &'a str, policy: DescendPolicy) -> Self {
        Self { sentinel, policy }
    }

    pub fn from_schema(schema: &'a Schema) -> Self {
        Self::new(&schema.part_sentinel, schema.descend)
    }

    pub fn is_part_bearing(&self, node: &CatalogNode) -> bool {
        node.is_category() && node.type_marker.as_deref() == Some(self.sentinel)
    }

    /// Append every part-bearing category below `root` to `out`, in pre-order.
    /// The root itself is never tested.
    pub fn collect(&self, root: &CatalogNode, out: &mut Vec<SparePartsResult>) {
        let mut chain = vec![root.display_name()];
        self.walk(root, &mut chain, out);
    }

    /// Like [`collect`](Self::collect), into a fresh vector.
    pub fn traverse(&self, root: &CatalogNode) -> Vec<SparePartsResult> {
        let mut out = Vec::new();
        self.collect(root, &mut out);
        out
    }

    fn walk<'n>(
        &self,
        node: &'n CatalogNode,
        chain: &mut Vec<&'n str>,
        out: &mut Vec<SparePartsResult>,
    ) {
        for child in node.categories() {
            if self.is_part_bearing(child) {
                let mut items = Vec::new();
                collect_item_names(child, &mut items);
                // chain[0] is the traversal root
                let parents = chain[1..].iter().map(|name| name.to_string()).collect();
                log::trace!("Part-bearing category {:?} ({} items)", child.display_name(), items.len());
                out.push(SparePartsResult { items, parents });

                if self.policy == DescendPolicy::Stop {
                    continue;
                }
            }

            chain.push(child.display_name());
            self.walk(child, chain, out);
            chain.pop();
        }
    }
}
