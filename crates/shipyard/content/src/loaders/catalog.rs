//! Hull and component catalog loaders.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shipyard_core::{ComponentSpec, HullTemplate};

use crate::loaders::{LoadResult, read_file};

/// Hull catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullCatalog {
    pub hulls: Vec<HullTemplate>,
}

/// Component catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCatalog {
    pub components: Vec<ComponentSpec>,
}

/// Loader for hull templates from RON files.
pub struct HullLoader;

impl HullLoader {
    /// Load hull templates from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing HullCatalog
    ///
    /// # Returns
    ///
    /// Returns the hulls in file order. Duplicate ids and other consistency
    /// checks happen later, in [`shipyard_core::CatalogBuilder::build`].
    pub fn load(path: &Path) -> LoadResult<Vec<HullTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<Vec<HullTemplate>> {
        let catalog: HullCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hull catalog RON: {}", e))?;

        Ok(catalog.hulls)
    }
}

/// Loader for component specs from RON files.
pub struct ComponentLoader;

impl ComponentLoader {
    /// Load component specs from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ComponentCatalog
    ///
    /// # Returns
    ///
    /// Returns the components in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<ComponentSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<Vec<ComponentSpec>> {
        let catalog: ComponentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse component catalog RON: {}", e))?;

        Ok(catalog.components)
    }
}
