/*!
 * Tests for error types and conversions
 */

use mtbridge::errors::{AppError, ProviderError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "Model is currently loading".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("Model is currently loading"));
}

#[test]
fn test_providerError_modelNotFound_shouldNameModel() {
    let error = ProviderError::ModelNotFound("Helsinki-NLP/opus-mt-ru-en".to_string());
    assert_eq!(error.to_string(), "Model not found: Helsinki-NLP/opus-mt-ru-en");
}

#[test]
fn test_providerError_emptyResponse_shouldNameModel() {
    let error = ProviderError::EmptyResponse("Helsinki-NLP/opus-mt-en-he".to_string());
    let display = error.to_string();
    assert!(display.contains("no translation candidates"));
    assert!(display.contains("Helsinki-NLP/opus-mt-en-he"));
}

#[test]
fn test_translationError_unsupportedPair_shouldNameBothLanguages() {
    let error = TranslationError::UnsupportedLanguagePair {
        source_language: "Russian".to_string(),
        destination_language: "English".to_string(),
    };
    assert_eq!(error.to_string(), "Unsupported language pair: 'Russian' -> 'English'");
}

#[test]
fn test_translationError_fromProviderError_shouldWrapCorrectly() {
    let provider_error = ProviderError::ConnectionError("Host unreachable".to_string());
    let translation_error: TranslationError = provider_error.into();
    let display = format!("{}", translation_error);
    assert!(display.contains("Provider error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_translationError_fromSerdeError_shouldBeSerialization() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let translation_error: TranslationError = serde_error.into();
    assert!(matches!(translation_error, TranslationError::Serialization(_)));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_config_shouldDisplayCorrectly() {
    let error = AppError::Config("missing field".to_string());
    assert_eq!(error.to_string(), "Configuration error: missing field");
}
