//! Demo configuration.

use quadtree::TreeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there if it does
    /// not exist yet.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.tree.validate()?;
        Ok(config)
    }
}

/// Workload run by the demo.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Random points to insert.
    #[serde(default = "default_points")]
    pub points: usize,
    /// Random neighbourhood queries to run.
    #[serde(default = "default_queries")]
    pub queries: usize,
    /// Half side length of each query square.
    #[serde(default = "default_query_size")]
    pub query_size: f32,
    /// RNG seed, random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            queries: default_queries(),
            query_size: default_query_size(),
            seed: None,
        }
    }
}

fn default_points() -> usize {
    10_000
}
fn default_queries() -> usize {
    100
}
fn default_query_size() -> f32 {
    25.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadtree::QuadTreeError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.tree, TreeConfig::default());
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = Config::from_toml_str(
            r#"
            [tree]
            width = 100.0
            capacity = 4

            [demo]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.tree.width, 100.0);
        assert_eq!(config.tree.capacity, 4);
        assert_eq!(config.demo.seed, Some(7));
        assert_eq!(config.demo.points, 10_000);
    }

    #[test]
    fn test_invalid_tree_rejected() {
        let err = Config::from_toml_str("[tree]\ncapacity = 0\n").unwrap_err();
        assert_eq!(err.downcast_ref::<QuadTreeError>(), Some(&QuadTreeError::ZeroCapacity));
    }

    #[test]
    fn test_malformed_document() {
        let err = Config::from_toml_str("[tree\nwidth = ").unwrap_err();
        assert!(err.downcast_ref::<toml::de::Error>().is_some());
    }

    #[test]
    fn test_load_creates_default_file() {
        let path = std::env::temp_dir()
            .join(format!("quadtree-demo-config-{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let created = Config::load(&path).unwrap();
        assert!(path.exists());
        let reloaded = Config::load(&path).unwrap();
        assert_eq!(created.tree, reloaded.tree);
        assert_eq!(created.demo, reloaded.demo);

        std::fs::remove_file(&path).unwrap();
    }
}
