use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::latency::{Latency, NoLatency, SimulatedLatency};
use crate::FinderError;

/// Runtime settings for the recipe finder
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Simulated response delay in milliseconds (0 disables it)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// JSON catalog to use instead of the built-in recipes
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            catalog_path: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    1000
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__LATENCY_MS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn latency(&self) -> Box<dyn Latency> {
        if self.latency_ms == 0 {
            Box::new(NoLatency)
        } else {
            Box::new(SimulatedLatency::from_millis(self.latency_ms))
        }
    }

    /// The configured catalog file, or the built-in recipes when none is set
    pub fn catalog(&self) -> Result<Catalog, FinderError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::reference()),
        }
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested keys: RECIPE_FINDER__LATENCY_MS
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.latency_ms, 1000);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_default_catalog_is_reference() {
        let catalog = FinderConfig::default().catalog().unwrap();
        assert_eq!(catalog, Catalog::reference());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = FinderConfig {
            latency_ms: 0,
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
        };
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "latency_ms = 250\ncatalog_path = \"recipes.json\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: FinderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.catalog_path, Some(PathBuf::from("recipes.json")));
    }

    #[test]
    fn test_empty_sources_use_defaults() {
        let settings = Config::builder().build().unwrap();
        let config: FinderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.latency_ms, 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_latency_skips_delay() {
        let config = FinderConfig {
            latency_ms: 0,
            catalog_path: None,
        };
        let start = tokio::time::Instant::now();
        config.latency().wait().await;
        assert!(start.elapsed() < std::time::Duration::from_millis(1));
    }
}
