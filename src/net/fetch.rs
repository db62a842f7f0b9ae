use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::config::SourceConfig;
use crate::error::{CatalogError, Result};
use crate::net::archive::extract_archive;

/// Download `url_str` into `dest` (blocking). Returns the number of bytes written.
pub fn download(url_str: &str, dest: &Path) -> Result<u64> {
    let parsed = Url::parse(url_str)?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("parts-catalog/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    let mut response = client
        .get(parsed.as_str())
        .header("Accept", "application/zip,application/octet-stream;q=0.9,*/*;q=0.8")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus(status.as_u16()));
    }

    let mut file = File::create(dest).map_err(|e| CatalogError::io(dest, e))?;
    let written = response.copy_to(&mut file)?;
    Ok(written)
}

/// Make sure the extracted catalog XML exists locally, downloading and
/// unpacking the archive on first use. Returns the XML path.
///
/// Guarded by a plain existence check: two first requests racing each
/// other may both download.
pub fn ensure_local(source: &SourceConfig) -> Result<PathBuf> {
    let xml_path = source.xml_path();
    if xml_path.exists() {
        log::debug!("Catalog present: {}", xml_path.display());
        return Ok(xml_path);
    }

    let url = source
        .url
        .as_deref()
        .ok_or_else(|| CatalogError::NoSource(xml_path.clone()))?;
    // Reject a bad URL before touching the file system
    Url::parse(url)?;

    fs::create_dir_all(&source.data_dir).map_err(|e| CatalogError::io(&source.data_dir, e))?;

    let archive = source.archive_path();
    log::info!("Downloading catalog {} -> {}", url, archive.display());
    let bytes = download(url, &archive)?;
    let entries = extract_archive(&archive, &source.data_dir)?;
    log::info!("Fetched {} bytes, extracted {} entries", bytes, entries);

    if !xml_path.exists() {
        return Err(CatalogError::MissingExtract(xml_path));
    }
    Ok(xml_path)
}
