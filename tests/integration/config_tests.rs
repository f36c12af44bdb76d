//! Configuration loading from disk

use persona_chat::{ChatError, Config};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_full_config() {
    let file = write_config(
        r#"
persona:
  name: Ada Lovelace
  description: A mathematician.
  instructions:
    - Keep answers short
gemini:
  api_key: file-key
  model: gemini-test
governor:
  min_interval_ms: 20000
  max_attempts: 3
"#,
    );

    let config = Config::from_file(file.path()).await.unwrap();

    assert_eq!(config.persona.name, "Ada Lovelace");
    assert_eq!(config.persona.instructions, vec!["Keep answers short"]);
    assert!(config.gemini.api_key.is_some());
    assert_eq!(config.governor.min_interval_ms, 20_000);
    assert_eq!(config.governor.max_attempts, 3);
    assert_eq!(config.governor.base_delay_ms, 1_000);
}

#[tokio::test]
async fn test_defaults_fill_missing_sections() {
    let file = write_config(
        r#"
persona:
  name: Ada Lovelace
gemini:
  api_key: file-key
"#,
    );

    let config = Config::from_file(file.path()).await.unwrap();

    assert_eq!(config.governor.min_interval_ms, 15_000);
    assert_eq!(config.governor.max_attempts, 2);
    assert_eq!(config.persona.instructions.len(), 5);
    assert_eq!(config.gemini.api_version, "v1beta");
}

#[tokio::test]
async fn test_invalid_governor_rejected() {
    let file = write_config(
        r#"
persona:
  name: Ada Lovelace
gemini:
  api_key: file-key
governor:
  min_interval_ms: 0
"#,
    );

    let err = Config::from_file(file.path()).await.unwrap_err();

    assert!(matches!(err, ChatError::Validation(_)));
}

#[tokio::test]
async fn test_unparseable_file_rejected() {
    let file = write_config("persona: [not, a, map");

    let err = Config::from_file(file.path()).await.unwrap_err();

    assert!(matches!(err, ChatError::Yaml(_)));
}

#[tokio::test]
async fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let err = Config::from_file(dir.path().join("absent.yaml"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::Io(_)));
}
