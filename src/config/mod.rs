//! Configuration management
//!
//! Configuration is read from a YAML file and then overlaid with
//! environment variables, so the API key never has to live on disk.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::providers::gemini::GeminiConfig;
use crate::utils::error::{ChatError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Persona the model speaks as
    pub persona: PersonaConfig,
    /// Endpoint settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Admission and retry settings
    #[serde(default)]
    pub governor: GovernorConfig,
}

impl Config {
    /// Load configuration from a YAML file, apply environment overrides and validate
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let mut config = Self::from_yaml(&content)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay environment values using the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = API_KEY_ENV_VARS.iter().find_map(|key| non_empty(*key)) {
            debug!("Using API key from environment");
            self.gemini.api_key = Some(api_key);
        }
        if let Some(base_url) = non_empty("GEMINI_BASE_URL") {
            self.gemini.base_url = base_url;
        }
        if let Some(model) = non_empty("GEMINI_MODEL") {
            self.gemini.model = model;
        }
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(ChatError::Validation)
    }
}
