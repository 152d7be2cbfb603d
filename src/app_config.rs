use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use url::Url;

use crate::errors::AppError;
use crate::language_utils::{self, LanguagePair, LanguageTable};
use crate::translation::model::ModelTemplate;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Translation request settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings injected into the request handler
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Known languages, name -> ISO 639-1 code
    #[serde(default)]
    pub languages: LanguageTable,

    /// Ordered pairs that may be translated
    #[serde(default = "language_utils::default_supported_pairs")]
    pub supported_pairs: Vec<LanguagePair>,

    /// Model identifier template
    /// Placeholders: {source}, {destination}
    #[serde(default)]
    pub model_template: ModelTemplate,

    /// Emit the first translated line of every request
    #[serde(default)]
    pub debug: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            languages: LanguageTable::default(),
            supported_pairs: language_utils::default_supported_pairs(),
            model_template: ModelTemplate::default(),
            debug: false,
        }
    }
}

/// Hugging Face inference API settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    // @field: Base URL models are addressed under
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: API token, empty for anonymous access
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Let the server hold the request while a cold model loads
    #[serde(default = "default_true")]
    pub wait_for_model: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            wait_for_model: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_timeout_secs() -> u64 {
    // First use of a model includes loading it on the server
    120
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {}: {}", path.display(), e)))
    }

    /// Write this configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the file at `path`, or write and return the defaults if it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found at '{}', creating default config.", path.display());
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Level filter the process should run at.
    ///
    /// The translation trace is logged at info, so `translation.debug`
    /// raises anything quieter to info.
    pub fn effective_level_filter(&self) -> log::LevelFilter {
        let configured = self.log_level.to_level_filter();
        if self.translation.debug && configured < log::LevelFilter::Info {
            log::LevelFilter::Info
        } else {
            configured
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.translation.validate()?;
        self.backend.validate()?;
        Ok(())
    }
}

impl TranslationConfig {
    /// Validate languages, pairs and the model template
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(anyhow!("At least one language must be configured"));
        }

        let mut seen = HashSet::new();
        for entry in self.languages.entries() {
            if entry.name.trim().is_empty() {
                return Err(anyhow!("Language names cannot be empty"));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(anyhow!("Language '{}' is configured twice", entry.name));
            }
            language_utils::validate_language_code(&entry.code)?;
        }

        if self.supported_pairs.is_empty() {
            return Err(anyhow!("At least one language pair must be configured"));
        }

        for pair in &self.supported_pairs {
            for name in [&pair.source, &pair.destination] {
                if !self.languages.contains(name) {
                    return Err(anyhow!("Language pair {} references unknown language '{}'", pair, name));
                }
            }
            if pair.source == pair.destination {
                return Err(anyhow!("Language pair {} translates a language into itself", pair));
            }
        }

        self.model_template.validate()
    }
}

impl BackendConfig {
    /// Validate endpoint and timeout
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| anyhow!("Invalid backend endpoint '{}': {}", self.endpoint, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!("Backend endpoint must use http or https: {}", self.endpoint));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("Backend timeout must be greater than zero"));
        }

        Ok(())
    }
}
