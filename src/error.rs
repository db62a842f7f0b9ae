use std::path::{Path, PathBuf};

/// Errors raised while fetching, loading or rendering the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The XML file is absent and no source URL was configured to fetch it.
    #[error("{} is missing and no source URL is configured", .0.display())]
    NoSource(PathBuf),

    #[error("invalid source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("download returned HTTP {0}")]
    HttpStatus(u16),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The archive extracted cleanly but did not contain the expected file.
    #[error("archive did not contain {}", .0.display())]
    MissingExtract(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("background task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl CatalogError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Pipeline phase the error came from, used in log lines.
    pub fn phase(&self) -> &'static str {
        match self {
            Self::NoSource(_)
            | Self::InvalidUrl(_)
            | Self::Download(_)
            | Self::HttpStatus(_)
            | Self::Archive(_)
            | Self::MissingExtract(_) => "fetch",
            Self::Io { .. } | Self::Xml(_) => "parse",
            Self::Template(_) | Self::Render(_) => "render",
            Self::Worker(_) => "server",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
