//! Configuration management for the AgroMap client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGROMAP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Analysis service configuration
    pub analysis: AnalysisConfig,

    /// Map behavior configuration
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Base URL of the analysis service
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    /// Zoom level when recentering on an explicit coordinate search
    pub point_zoom: u8,

    /// Zoom level when recentering on a matched city
    pub city_zoom: u8,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGROMAP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("analysis.base_url", "http://localhost:8000")?
            .set_default("map.point_zoom", 12)?
            .set_default("map.city_zoom", 11)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGROMAP_ prefix)
            .add_source(
                Environment::with_prefix("AGROMAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            point_zoom: 12,
            city_zoom: 11,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            analysis: AnalysisConfig::default(),
            map: MapConfig::default(),
        }
    }
}
