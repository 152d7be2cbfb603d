use log::{debug, info};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::language_utils::{Language, LanguagePair};
use crate::providers::TranslationBackend;
use crate::providers::huggingface::HuggingFace;
use crate::translation::{TranslationRequestHandler, TranslationResult};

// @module: Application controller for translation requests

/// Sample requests run by the `demo` command
pub const DEMO_REQUESTS: [(Language, Language, &str); 6] = [
    (Language::English, Language::Hebrew, "Hello, I like to eat 5 apples every day"),
    (Language::English, Language::Hebrew, "It's difficult to run a marathon"),
    (Language::English, Language::Hebrew, "Neural networks is a very interesting subject"),
    (Language::Hebrew, Language::Russian, "שלום, אני אוהב ללמוד שפות"),
    (Language::Hebrew, Language::Russian, "מחר אני נוסע לים עם המשפחה שלי"),
    (Language::Hebrew, Language::Russian, "למידת מכונה היא תחום מעניין מאוד"),
];

/// Supported pair together with the model serving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairInfo {
    pub pair: LanguagePair,
    pub model_identifier: String,
}

/// Main application controller
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Request handler built from the configuration
    handler: TranslationRequestHandler,
}

impl Controller {
    // @method: Create a controller talking to the Hugging Face inference API
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let backend = HuggingFace::new(
            config.backend.endpoint.clone(),
            config.backend.api_key.clone(),
            config.backend.timeout_secs,
            config.backend.wait_for_model,
        );
        Self::with_backend(config, Box::new(backend))
    }

    // @method: Create a controller with an explicit backend
    pub fn with_backend(config: Config, backend: Box<dyn TranslationBackend>) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("Configuration validation failed: {}", e)))?;

        let handler = TranslationRequestHandler::new(config.translation.clone(), backend)
            .map_err(|e| AppError::Config(e.to_string()))?;
        debug!("Controller initialized with backend {}", handler.backend_name());

        Ok(Self { config, handler })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn handler(&self) -> &TranslationRequestHandler {
        &self.handler
    }

    /// Translate one text and return the serialized record
    pub async fn translate(&self, source: &str, destination: &str, text: &str) -> String {
        let result = self.handler.translate_named(source, destination, text).await;
        if result.succeeded() {
            info!("Translated {} -> {}", source, destination);
        }
        TranslationRequestHandler::serialize(&result)
    }

    /// Supported pairs with their model identifiers
    pub fn pairs(&self) -> Vec<PairInfo> {
        self.handler
            .supported_pairs()
            .iter()
            .filter_map(|pair| {
                self.handler
                    .model_identifier_for(&pair.source, &pair.destination)
                    .map(|model_identifier| PairInfo {
                        pair: pair.clone(),
                        model_identifier,
                    })
            })
            .collect()
    }

    /// Run every sample request in order
    pub async fn run_demo(&self) -> Vec<TranslationResult> {
        let mut results = Vec::with_capacity(DEMO_REQUESTS.len());
        for (index, (source, destination, text)) in DEMO_REQUESTS.iter().enumerate() {
            info!("Demo {}/{}: {} -> {}", index + 1, DEMO_REQUESTS.len(), source, destination);
            results.push(self.handler.translate(*source, *destination, text).await);
        }
        results
    }
}
