//! Page payloads assembled from extraction and traversal results.
//!
//! No traversal happens here beyond calling into `catalog`; ordering is
//! whatever the extractor and traverser produced.

use serde::Serialize;

use crate::catalog::extract::{count_items, item_names, item_records};
use crate::catalog::traverse::{PartsTraverser, SparePartsResult};
use crate::catalog::Catalog;
use crate::config::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountView {
    pub product_count: usize,
    /// `None` when the export has no discontinued section.
    pub discontinued_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamesView {
    pub product_names: Vec<String>,
}

/// A product and the flattened names of its spare parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductParts {
    pub name: String,
    pub parts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparePartsView {
    pub categories: Vec<SparePartsResult>,
    pub products: Vec<ProductParts>,
}

pub fn count_view(catalog: &Catalog, schema: &Schema) -> CountView {
    CountView {
        product_count: catalog.section(&schema.items_section).map_or(0, count_items),
        discontinued_count: catalog.section(&schema.discontinued_section).map(count_items),
    }
}

pub fn names_view(catalog: &Catalog, schema: &Schema) -> NamesView {
    NamesView {
        product_names: catalog
            .section(&schema.items_section)
            .map(item_names)
            .unwrap_or_default(),
    }
}

pub fn spare_parts_view(catalog: &Catalog, schema: &Schema) -> SparePartsView {
    let categories = catalog
        .section(&schema.categories_section)
        .map(|section| PartsTraverser::from_schema(schema).traverse(section))
        .unwrap_or_default();

    // Every item that owns a part wrapper, nested parts included
    let products = catalog
        .section(&schema.items_section)
        .map(|section| {
            item_records(section)
                .into_iter()
                .filter(|record| record.parts.is_some())
                .map(|record| ProductParts {
                    parts: record.part_names(),
                    name: record.name,
                })
                .collect()
        })
        .unwrap_or_default();

    SparePartsView {
        categories,
        products,
    }
}
