//! Runtime configuration.
//!
//! The catalog schema is not fixed: exports disagree on the section that holds
//! the category tree, on the marker value for part-bearing categories, and on
//! whether nested categories below a marked one are still walked. All of that
//! lives in [`Schema`] so the traversal code never hardcodes a variant.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// What the traverser does after recording a part-bearing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DescendPolicy {
    /// Keep walking into the marked category's child categories.
    #[default]
    Continue,
    /// Treat the marked category as a leaf.
    Stop,
}

/// Element, attribute and section names of the catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub item_tag: String,
    pub parts_tag: String,
    pub name_attr: String,
    pub type_attr: String,
    /// Value of `type_attr` that marks a category as part-bearing.
    pub part_sentinel: String,
    pub items_section: String,
    pub discontinued_section: String,
    pub categories_section: String,
    pub descend: DescendPolicy,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            item_tag: "item".into(),
            parts_tag: "parts".into(),
            name_attr: "name".into(),
            type_attr: "type".into(),
            part_sentinel: "parts".into(),
            items_section: "items".into(),
            discontinued_section: "discontinuedItems".into(),
            categories_section: "categoriesWithParts".into(),
            descend: DescendPolicy::Continue,
        }
    }
}

/// Where the catalog comes from and where the local copy lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub data_dir: PathBuf,
    pub archive_name: String,
    pub xml_name: String,
}

impl SourceConfig {
    pub fn xml_path(&self) -> PathBuf {
        self.data_dir.join(&self.xml_name)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(&self.archive_name)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            data_dir: PathBuf::from("data"),
            archive_name: "export.zip".into(),
            xml_name: "export_full.xml".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub source: SourceConfig,
    pub schema: Schema,
    /// Reuse the parsed tree while the XML file's mtime is unchanged.
    pub cache_tree: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            schema: Schema::default(),
            cache_tree: true,
        }
    }
}

/// Command line, with environment fallbacks for deployment.
#[derive(Debug, Parser)]
#[command(name = "parts-catalog", version, about)]
pub struct Cli {
    /// URL of the zipped XML export
    #[arg(long, env = "CATALOG_SOURCE_URL")]
    pub source_url: Option<String>,

    #[arg(long, env = "CATALOG_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[arg(long, default_value = "export.zip")]
    pub archive_name: String,

    /// Name of the XML file inside the archive
    #[arg(long, default_value = "export_full.xml")]
    pub xml_name: String,

    #[arg(long, env = "CATALOG_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Marker value identifying part-bearing categories
    #[arg(long, default_value = "parts")]
    pub sentinel: String,

    #[arg(long, default_value = "type")]
    pub type_attr: String,

    #[arg(long, default_value = "categoriesWithParts")]
    pub categories_section: String,

    #[arg(long, default_value = "items")]
    pub items_section: String,

    #[arg(long, default_value = "discontinuedItems")]
    pub discontinued_section: String,

    #[arg(long, value_enum, default_value_t = DescendPolicy::Continue)]
    pub descend: DescendPolicy,

    /// Reparse the XML on every request
    #[arg(long)]
    pub no_tree_cache: bool,
}

impl Cli {
    pub fn into_config(self) -> CatalogConfig {
        let schema = Schema {
            type_attr: self.type_attr,
            part_sentinel: self.sentinel,
            items_section: self.items_section,
            discontinued_section: self.discontinued_section,
            categories_section: self.categories_section,
            descend: self.descend,
            ..Schema::default()
        };
        CatalogConfig {
            source: SourceConfig {
                url: self.source_url.filter(|u| !u.trim().is_empty()),
                data_dir: self.data_dir,
                archive_name: self.archive_name,
                xml_name: self.xml_name,
            },
            schema,
            cache_tree: !self.no_tree_cache,
        }
    }
}
