/*!
 * Backend implementations for the external translation capability.
 *
 * This module contains client implementations that turn a model identifier
 * and a text into translation candidates:
 * - HuggingFace: hosted inference API serving the Opus-MT models
 * - Mock: in-process backend for tests and benchmarks
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation backends
///
/// The handler treats implementations as opaque: it passes a model identifier
/// and the text, and receives every candidate sequence the model generated.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Short backend name used in log lines
    fn name(&self) -> &str;

    /// Translate `text` with the model named by `model_identifier`
    ///
    /// # Returns
    /// * `Result<Vec<String>, ProviderError>` - Candidates in generation order, or an error
    async fn translate(&self, model_identifier: &str, text: &str) -> Result<Vec<String>, ProviderError>;
}

pub mod huggingface;
pub mod mock;
