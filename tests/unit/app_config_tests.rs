/*!
 * Tests for application configuration functionality
 */

use mtbridge::app_config::{BackendConfig, Config, LogLevel, TranslationConfig};
use mtbridge::language_utils::{LanguageEntry, LanguagePair};
use mtbridge::translation::ModelTemplate;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.translation.languages.len(), 3);
    assert_eq!(config.translation.supported_pairs.len(), 2);
    assert_eq!(
        config.translation.model_template.as_str(),
        "Helsinki-NLP/opus-mt-{source}-{destination}"
    );
    assert!(!config.translation.debug);

    assert_eq!(config.backend.endpoint, "https://api-inference.huggingface.co/models");
    assert!(config.backend.api_key.is_empty());
    assert_eq!(config.backend.timeout_secs, 120);
    assert!(config.backend.wait_for_model);

    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_deserialize_withEmptyObject_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.translation, TranslationConfig::default());
    assert_eq!(config.backend, BackendConfig::default());
}

#[test]
fn test_config_deserialize_withPartialBackend_shouldFillMissingFields() {
    let json = r#"{ "backend": { "api_key": "hf_123" }, "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.backend.api_key, "hf_123");
    assert_eq!(config.backend.timeout_secs, 120);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_config_serialize_shouldUseDocumentedShape() {
    let value = serde_json::to_value(Config::default()).unwrap();

    assert_eq!(value["translation"]["languages"][1]["name"], "Hebrew");
    assert_eq!(value["translation"]["languages"][1]["code"], "he");
    assert_eq!(value["translation"]["supported_pairs"][0]["source"], "English");
    assert_eq!(value["translation"]["supported_pairs"][0]["destination"], "Hebrew");
    assert_eq!(value["log_level"], "info");
}

#[test]
fn test_validation_withInvalidLanguageCode_shouldFail() {
    let mut config = Config::default();
    config.translation.languages = mtbridge::language_utils::LanguageTable::new(vec![
        LanguageEntry::new("English", "en"),
        LanguageEntry::new("Hebrew", "hebrew"),
        LanguageEntry::new("Russian", "ru"),
    ]);
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_withDuplicateLanguage_shouldFail() {
    let mut config = Config::default();
    config.translation.languages = mtbridge::language_utils::LanguageTable::new(vec![
        LanguageEntry::new("English", "en"),
        LanguageEntry::new("English", "he"),
    ]);
    config.translation.supported_pairs = vec![];
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_withPairProblems_shouldFail() {
    let mut config = Config::default();
    config.translation.supported_pairs = vec![];
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.translation.supported_pairs.push(LanguagePair::new("Hebrew", "Hebrew"));
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.translation.supported_pairs.push(LanguagePair::new("Hebrew", "French"));
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_withBadTemplate_shouldFail() {
    let mut config = Config::default();
    config.translation.model_template = ModelTemplate::new("Helsinki-NLP/opus-mt-{src}-{dst}");
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_withBadBackend_shouldFail() {
    let mut config = Config::default();
    config.backend.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.backend.endpoint = "ftp://example.com/models".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.backend.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

/// Test that a debug config keeps the translation trace visible
#[test]
fn test_effectiveLevelFilter_withDebugAndQuietLevel_shouldRaiseToInfo() {
    let mut config = Config::default();
    config.log_level = LogLevel::Warn;
    assert_eq!(config.effective_level_filter(), log::LevelFilter::Warn);

    config.translation.debug = true;
    assert_eq!(config.effective_level_filter(), log::LevelFilter::Info);

    config.log_level = LogLevel::Trace;
    assert_eq!(config.effective_level_filter(), log::LevelFilter::Trace);
}
