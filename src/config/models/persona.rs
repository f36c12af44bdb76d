//! Persona configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Who the chat widget speaks as
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonaConfig {
    /// Full name the model answers as
    pub name: String,
    /// Free-form biography handed to the model verbatim
    #[serde(default)]
    pub description: String,
    /// Behavioral rules listed after the biography
    #[serde(default = "default_instructions")]
    pub instructions: Vec<String>,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            instructions: default_instructions(),
        }
    }
}
