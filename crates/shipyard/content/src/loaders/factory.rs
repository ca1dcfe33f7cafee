//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use shipyard_core::{Catalog, ComponentSpec, DesignConfig, HullTemplate};
use tracing::info;

use crate::loaders::{ComponentLoader, ConfigLoader, HullLoader, LoadResult};

/// Content factory that loads all design content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── hulls.ron
/// └── components.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load design rules from `config.toml`.
    pub fn load_config(&self) -> LoadResult<DesignConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load hull templates from `hulls.ron`.
    pub fn load_hulls(&self) -> LoadResult<Vec<HullTemplate>> {
        let path = self.data_dir.join("hulls.ron");
        HullLoader::load(&path)
    }

    /// Load component specs from `components.ron`.
    pub fn load_components(&self) -> LoadResult<Vec<ComponentSpec>> {
        let path = self.data_dir.join("components.ron");
        ComponentLoader::load(&path)
    }

    /// Load and validate the full catalog.
    ///
    /// `config.allow_placeholder_components` decides whether stat-less entries
    /// are skipped or fail the load.
    ///
    /// # Arguments
    ///
    /// * `config` - Design rules (load via `load_config()`)
    pub fn load_catalog(&self, config: &DesignConfig) -> LoadResult<Catalog> {
        let hulls = self.load_hulls()?;
        let components = self.load_components()?;

        let catalog = Catalog::builder()
            .allow_placeholders(config.allow_placeholder_components)
            .hulls(hulls)
            .components(components)
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid catalog in {}: {}", self.data_dir.display(), e))?;

        let (hulls, components) = catalog.counts();
        info!(
            hulls,
            components,
            data_dir = %self.data_dir.display(),
            "loaded ship design catalog"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
