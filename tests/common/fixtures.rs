//! Test fixtures with sensible defaults

use persona_chat::config::{GovernorConfig, PersonaConfig};
use persona_chat::{Config, GeminiConfig, Persona};

pub const TEST_API_KEY: &str = "test-key-123";
pub const TEST_MODEL: &str = "gemini-test";

pub fn test_persona() -> Persona {
    Persona::from_config(&PersonaConfig {
        name: "Ada Lovelace".to_string(),
        description: "A mathematician who wrote the first published algorithm.".to_string(),
        ..PersonaConfig::default()
    })
}

/// Real-clock governor settings with a short backoff
pub fn fast_governor() -> GovernorConfig {
    GovernorConfig {
        min_interval_ms: 15_000,
        max_attempts: 2,
        base_delay_ms: 20,
    }
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        persona: PersonaConfig {
            name: "Ada Lovelace".to_string(),
            ..PersonaConfig::default()
        },
        gemini: GeminiConfig::new_google_ai(TEST_API_KEY)
            .with_base_url(base_url)
            .with_model(TEST_MODEL)
            .with_timeout(5),
        governor: fast_governor(),
    }
}
