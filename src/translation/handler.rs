/*!
 * Translation request handler.
 *
 * Validates a (source, destination) pair against the configured allow-list,
 * resolves the model identifier, delegates to the backend and packages the
 * outcome as a `TranslationResult`.
 */

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::app_config::TranslationConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::language_utils::{self, Language, LanguagePair};
use crate::providers::TranslationBackend;
use super::result::{self, TranslationResult};

/// Handles one translation request at a time
#[derive(Debug)]
pub struct TranslationRequestHandler {
    /// Languages, pairs and model template, fixed at construction
    config: TranslationConfig,

    /// External translation capability
    backend: Box<dyn TranslationBackend>,
}

impl TranslationRequestHandler {
    /// Create a handler, rejecting an inconsistent configuration
    pub fn new(config: TranslationConfig, backend: Box<dyn TranslationBackend>) -> Result<Self> {
        config.validate()?;

        debug!(
            "Translation handler ready: backend={}, pairs=[{}], template={}",
            backend.name(),
            language_utils::describe_pairs(&config.supported_pairs),
            config.model_template
        );

        Ok(Self { config, backend })
    }

    /// Whether the first translated line of each request is traced
    pub fn debug(&self) -> bool {
        self.config.debug
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn supported_pairs(&self) -> &[LanguagePair] {
        &self.config.supported_pairs
    }

    /// Model identifier for a supported pair, `None` for anything else
    pub fn model_identifier_for(&self, source: &str, destination: &str) -> Option<String> {
        if !self.config.supported_pairs.iter().any(|pair| pair.matches(source, destination)) {
            return None;
        }

        let source_code = self.config.languages.code_for(source)?;
        let destination_code = self.config.languages.code_for(destination)?;

        Some(self.config.model_template.resolve(source_code, destination_code))
    }

    /// Translate between two built-in languages
    pub async fn translate(&self, source: Language, destination: Language, text: &str) -> TranslationResult {
        self.translate_named(source.name(), destination.name(), text).await
    }

    /// Translate between two languages given by name.
    ///
    /// Unknown names and unsupported pairs produce a failure record, as do
    /// backend errors.
    pub async fn translate_named(&self, source: &str, destination: &str, text: &str) -> TranslationResult {
        match self.try_translate_named(source, destination, text).await {
            Ok(result) => result,
            Err(e) => {
                error!("Translation {} -> {} failed: {}", source, destination, e);
                TranslationResult::failure(source, destination, text, format!("Translation failed: {}", e))
            }
        }
    }

    /// Like [`translate_named`](Self::translate_named), but backend errors are returned as `Err`
    pub async fn try_translate_named(
        &self,
        source: &str,
        destination: &str,
        text: &str,
    ) -> Result<TranslationResult, TranslationError> {
        let Some(model_identifier) = self.model_identifier_for(source, destination) else {
            let err = TranslationError::UnsupportedLanguagePair {
                source_language: source.to_string(),
                destination_language: destination.to_string(),
            };
            warn!("{}", err);
            return Ok(TranslationResult::failure(
                source,
                destination,
                text,
                self.unsupported_pair_message(),
            ));
        };

        debug!(
            "Translating {} chars {} -> {} with {} via {}",
            text.chars().count(),
            source,
            destination,
            model_identifier,
            self.backend.name()
        );

        let candidates = self.backend.translate(&model_identifier, text).await?;
        if candidates.len() > 1 {
            debug!("Discarding {} extra candidates", candidates.len() - 1);
        }

        let translated_text = candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::EmptyResponse(model_identifier.clone()))?;

        if self.config.debug {
            info!("{}", translated_text);
        }

        Ok(TranslationResult::success(source, destination, text, translated_text))
    }

    /// Translate and serialize in one call
    pub async fn translate_to_json(&self, source: &str, destination: &str, text: &str) -> String {
        let result = self.translate_named(source, destination, text).await;
        Self::serialize(&result)
    }

    /// Serialize a result record to JSON, never failing
    pub fn serialize(result: &TranslationResult) -> String {
        result::to_json(result)
    }

    fn unsupported_pair_message(&self) -> String {
        format!(
            "Invalid inputs. Currently, possible language-pairs are: {}",
            language_utils::describe_pairs(&self.config.supported_pairs)
        )
    }
}
