use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Client for the Hugging Face inference API
#[derive(Debug)]
pub struct HuggingFace {
    /// Base URL under which models are addressed, without trailing slash
    base_url: String,
    /// Optional bearer token
    api_key: Option<String>,
    /// Ask the server to block until a cold model is loaded
    wait_for_model: bool,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request body
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    /// Text to translate
    inputs: &'a str,
    /// Inference options
    options: InferenceOptions,
}

/// Inference options
#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    /// Block until the model is loaded instead of answering 503
    wait_for_model: bool,
}

/// One generated candidate
#[derive(Debug, Deserialize)]
pub struct TranslationCandidate {
    pub translation_text: String,
}

/// Error body returned on non-success statuses
#[derive(Debug, Deserialize)]
pub struct InferenceErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

impl HuggingFace {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64, wait_for_model: bool) -> Self {
        let endpoint = endpoint.into();
        let api_key = api_key.into();

        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            api_key: if api_key.is_empty() { None } else { Some(api_key) },
            wait_for_model,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .pool_idle_timeout(Duration::from_secs(90))
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
        }
    }

    /// URL of a model on this endpoint
    pub fn model_url(&self, model_identifier: &str) -> String {
        format!("{}/{}", self.base_url, model_identifier.trim_start_matches('/'))
    }

    /// Whether requests carry an Authorization header
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Decode a 200 body into candidates
pub(crate) fn parse_candidates(model_identifier: &str, body: &str) -> Result<Vec<String>, ProviderError> {
    let candidates: Vec<TranslationCandidate> = serde_json::from_str(body).map_err(|e| {
        ProviderError::ParseError(format!("{} (body: {})", e, truncate_body(body)))
    })?;

    if candidates.is_empty() {
        return Err(ProviderError::EmptyResponse(model_identifier.to_string()));
    }

    Ok(candidates.into_iter().map(|c| c.translation_text).collect())
}

/// Map a non-success status and its body to a provider error
pub(crate) fn status_error(status: StatusCode, model_identifier: &str, body: &str) -> ProviderError {
    let message = match serde_json::from_str::<InferenceErrorBody>(body) {
        Ok(parsed) => match parsed.estimated_time {
            Some(eta) => format!("{} (estimated time {:.1}s)", parsed.error, eta),
            None => parsed.error,
        },
        Err(_) => truncate_body(body),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
        StatusCode::NOT_FOUND => ProviderError::ModelNotFound(model_identifier.to_string()),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
        _ => ProviderError::ApiError {
            status_code: status.as_u16(),
            message,
        },
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() > 500 {
        body.chars().take(500).collect::<String>()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl TranslationBackend for HuggingFace {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn translate(&self, model_identifier: &str, text: &str) -> Result<Vec<String>, ProviderError> {
        let url = self.model_url(model_identifier);
        let request = InferenceRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: self.wait_for_model,
            },
        };

        let start_time = Instant::now();
        let mut builder = self.client.post(&url).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ProviderError::ConnectionError(format!("{}: {}", url, e))
            } else {
                ProviderError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read response body: {}", e)))?;

        debug!("{} answered {} in {:?}", url, status, start_time.elapsed());

        if !status.is_success() {
            let err = status_error(status, model_identifier, &body);
            error!("Hugging Face inference failed for {}: {}", model_identifier, err);
            return Err(err);
        }

        parse_candidates(model_identifier, &body)
    }
}
