pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod net;
pub mod server;
pub mod views;

pub use catalog::traverse::{PartsTraverser, SparePartsResult};
pub use catalog::{Catalog, CatalogNode, NodeKind};
pub use config::{CatalogConfig, DescendPolicy, Schema, SourceConfig};
pub use engine::CatalogEngine;
pub use error::{CatalogError, Result};
