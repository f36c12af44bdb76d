//! Persona prompt assembly

use crate::config::models::PersonaConfig;

/// The system text the model is instructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    name: String,
    system_text: String,
}

impl Persona {
    pub fn from_config(config: &PersonaConfig) -> Self {
        let name = config.name.trim().to_string();
        let mut system_text = format!("You are {}.", name);

        let description = config.description.trim();
        if !description.is_empty() {
            system_text.push(' ');
            system_text.push_str(description);
        }

        if !config.instructions.is_empty() {
            system_text.push_str("\n\nInstructions:");
            for instruction in &config.instructions {
                system_text.push_str("\n- ");
                system_text.push_str(&instruction.replace("{name}", &name));
            }
        }

        Self { name, system_text }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system_text(&self) -> &str {
        &self.system_text
    }
}
