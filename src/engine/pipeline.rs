use std::sync::Arc;

use crate::catalog::parser::load_catalog;
use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::net::cache::TreeCache;
use crate::net::fetch::ensure_local;
use crate::views::{count_view, names_view, spare_parts_view, CountView, NamesView, SparePartsView};

/// The catalog pipeline: Fetch → Extract → Parse → Assemble.
///
/// Blocking; callers on an async runtime should run it on a blocking thread.
pub struct CatalogEngine {
    config: CatalogConfig,
    cache: Option<TreeCache>,
}

impl CatalogEngine {
    pub fn new(config: CatalogConfig) -> Self {
        let cache = config.cache_tree.then(TreeCache::new);
        Self { config, cache }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Phases 1-3: make sure the XML is on disk, then load the tree.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let xml_path = ensure_local(&self.config.source)?;
        match &self.cache {
            Some(cache) => cache.load(&xml_path, &self.config.schema),
            None => Ok(Arc::new(load_catalog(&xml_path, &self.config.schema)?)),
        }
    }

    pub fn count_view(&self) -> Result<CountView> {
        let catalog = self.catalog()?;
        Ok(count_view(&catalog, &self.config.schema))
    }

    pub fn names_view(&self) -> Result<NamesView> {
        let catalog = self.catalog()?;
        Ok(names_view(&catalog, &self.config.schema))
    }

    pub fn spare_parts_view(&self) -> Result<SparePartsView> {
        let catalog = self.catalog()?;
        Ok(spare_parts_view(&catalog, &self.config.schema))
    }
}
