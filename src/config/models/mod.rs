//! Configuration data models

pub mod governor;
pub mod persona;

pub use governor::*;
pub use persona::*;

/// Default minimum spacing between outbound requests in milliseconds
pub fn default_min_interval_ms() -> u64 {
    15_000
}

/// Default total number of transport attempts per turn
pub fn default_max_attempts() -> u32 {
    2
}

/// Default delay before the first retry in milliseconds
pub fn default_base_delay_ms() -> u64 {
    1_000
}

/// Default persona instructions; `{name}` is replaced with the persona name
pub fn default_instructions() -> Vec<String> {
    vec![
        "Respond naturally as {name} would".to_string(),
        "Use short, conversational sentences".to_string(),
        "Be friendly and professional".to_string(),
        "Answer questions about your skills, projects, and background".to_string(),
        "Keep responses concise (2-3 sentences max)".to_string(),
    ]
}
