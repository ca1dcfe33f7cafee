//! Design rules loader.

use std::path::Path;

use shipyard_core::DesignConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for design configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing DesignConfig
    ///
    /// # Returns
    ///
    /// Returns a DesignConfig; omitted keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<DesignConfig> {
        let content = read_file(path)?;
        let config: DesignConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipyard_core::MiniaturizationRules;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "allow_placeholder_components = true\n\n\
             [miniaturization]\n\
             max_reduction_percent = 50\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert!(config.allow_placeholder_components);
        assert_eq!(
            config.miniaturization,
            MiniaturizationRules {
                reduction_per_level_percent:
                    MiniaturizationRules::DEFAULT_REDUCTION_PER_LEVEL_PERCENT,
                max_reduction_percent: 50,
            }
        );
    }

    #[test]
    fn empty_file_is_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(ConfigLoader::load(&path).unwrap(), DesignConfig::default());

        std::fs::write(&path, "[miniaturization]\nmax_reduction_percent = \"lots\"\n").unwrap();
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"));
    }
}
