use std::fs::File;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Unpack every entry of the zip at `archive_path` into `dest`.
/// Returns the number of entries. Entries whose paths would escape
/// `dest` make the whole extraction fail.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| CatalogError::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file)?;
    let entries = archive.len();
    archive.extract(dest)?;
    log::debug!("Extracted {} entries from {}", entries, archive_path.display());
    Ok(entries)
}
