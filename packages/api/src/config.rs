//! Toolkit configuration
//!
//! One immutable value built at startup and shared by reference. Nothing
//! reads configuration through global state.

use std::path::Path;

use certdesk_engine::config::{ConfigResult, ConfigurationError, Validator};
use certdesk_engine::EngineConfig;

use crate::assets::{AssetBundle, AssetError};

/// Everything a [`crate::Toolkit`] needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub assets: AssetBundle,
}

impl AppConfig {
    #[must_use]
    pub fn new(engine: EngineConfig, assets: AssetBundle) -> Self {
        Self { engine, assets }
    }

    /// Replace the engine settings
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the asset bundle
    #[must_use]
    pub fn with_assets(mut self, assets: AssetBundle) -> Self {
        self.assets = assets;
        self
    }

    /// Load engine settings from a JSON document and assets from a directory
    ///
    /// # Errors
    ///
    /// Returns the engine configuration error, or `Unreadable` wrapping the
    /// asset loading failure.
    pub fn load(engine_json: &str, asset_dir: impl AsRef<Path>) -> ConfigResult<Self> {
        let engine = EngineConfig::from_json_str(engine_json)?;
        let assets = AssetBundle::load_dir(asset_dir)
            .map_err(|e: AssetError| ConfigurationError::Unreadable(e.to_string()))?;
        Ok(Self { engine, assets })
    }
}

impl Validator for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.engine.validate()
    }
}
