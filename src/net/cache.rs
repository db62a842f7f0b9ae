//! Parsed-tree cache keyed by file path and modification time.
//!
//! Parsing the full export on every request is correct but slow. While
//! the file on disk is unchanged the same tree is handed out again; any
//! change in path or mtime triggers a reparse.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use crate::catalog::parser::load_catalog;
use crate::catalog::Catalog;
use crate::config::Schema;
use crate::error::{CatalogError, Result};

struct CachedTree {
    path: PathBuf,
    modified: SystemTime,
    catalog: Arc<Catalog>,
}

#[derive(Default)]
pub struct TreeCache {
    entry: Mutex<Option<CachedTree>>,
}

impl TreeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached tree for `path`, reparsing when the file changed.
    pub fn load(&self, path: &Path, schema: &Schema) -> Result<Arc<Catalog>> {
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| CatalogError::io(path, e))?;

        let mut entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cached) = entry.as_ref() {
            if cached.path == path && cached.modified == modified {
                log::debug!("Tree cache HIT: {}", path.display());
                return Ok(Arc::clone(&cached.catalog));
            }
        }

        log::debug!("Tree cache MISS: {}", path.display());
        let catalog = Arc::new(load_catalog(path, schema)?);
        *entry = Some(CachedTree {
            path: path.to_path_buf(),
            modified,
            catalog: Arc::clone(&catalog),
        });
        Ok(catalog)
    }

    #[cfg(test)]
    fn clear(&self) {
        *self.entry.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    #[cfg(test)]
    fn is_cached(&self) -> bool {
        self.entry.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_file_reuses_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.xml");
        std::fs::write(&path, "<export><items><item name=\"A\"/></items></export>").unwrap();

        let cache = TreeCache::new();
        assert!(!cache.is_cached());
        let first = cache.load(&path, &Schema::default()).unwrap();
        let second = cache.load(&path, &Schema::default()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        cache.clear();
        assert!(!cache.is_cached());
        let third = cache.load(&path, &Schema::default()).unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(*first, *third);
    }

    #[test]
    fn different_path_reparses() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.xml");
        let b = dir.path().join("b.xml");
        std::fs::write(&a, "<export><items/></export>").unwrap();
        std::fs::write(&b, "<other/>").unwrap();

        let cache = TreeCache::new();
        assert_eq!(cache.load(&a, &Schema::default()).unwrap().root.tag, "export");
        assert_eq!(cache.load(&b, &Schema::default()).unwrap().root.tag, "other");
    }

    #[test]
    fn parse_failure_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        std::fs::write(&path, "<export>").unwrap();

        let cache = TreeCache::new();
        assert!(cache.load(&path, &Schema::default()).is_err());
        assert!(!cache.is_cached());
    }
}
