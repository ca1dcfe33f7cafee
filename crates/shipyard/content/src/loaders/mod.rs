//! Content loaders for reading catalog data from files.
//!
//! Each loader turns one RON/TOML file into `shipyard-core` types; the
//! [`ContentFactory`] wires them to a data directory.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{ComponentCatalog, ComponentLoader, HullCatalog, HullLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
