//! Configuration validation

use super::Config;
use super::models::*;
use crate::core::providers::gemini::GeminiConfig;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating chat configuration");

        self.persona.validate()?;
        self.gemini.validate()?;
        self.governor.validate()?;

        Ok(())
    }
}

impl Validate for PersonaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Persona name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        match self.api_key.as_deref() {
            None => {
                return Err(
                    "API key is required (set gemini.api_key or GEMINI_API_KEY)".to_string(),
                );
            }
            Some(key) if key.trim().is_empty() => {
                return Err("API key cannot be empty".to_string());
            }
            Some(_) => {}
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "Base URL must use http:// or https:// scheme, got: {}",
                self.base_url
            ));
        }

        if self.model.trim().is_empty() {
            return Err("Model cannot be empty".to_string());
        }

        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.connect_timeout > self.request_timeout {
            return Err("Connect timeout cannot be greater than request timeout".to_string());
        }

        Ok(())
    }
}

impl Validate for GovernorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_interval_ms == 0 {
            return Err("min_interval_ms must be greater than 0".to_string());
        }

        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }

        if self.max_attempts > 10 {
            return Err("max_attempts cannot exceed 10".to_string());
        }

        Ok(())
    }
}
