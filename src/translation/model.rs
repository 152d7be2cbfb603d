/*!
 * Model identifier resolution.
 *
 * A model identifier is the key the backend uses to locate a pretrained model,
 * built by substituting the two language codes into a template such as
 * `Helsinki-NLP/opus-mt-{source}-{destination}`.
 */

use anyhow::{Result, anyhow};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const SOURCE_PLACEHOLDER: &str = "{source}";
const DESTINATION_PLACEHOLDER: &str = "{destination}";

/// Template for Opus-MT models published by Helsinki-NLP
pub const DEFAULT_MODEL_TEMPLATE: &str = "Helsinki-NLP/opus-mt-{source}-{destination}";

/// Model identifier template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelTemplate(String);

impl ModelTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the template carries exactly one `{source}` and one
    /// `{destination}` placeholder and nothing else in braces
    pub fn validate(&self) -> Result<()> {
        let placeholder = Regex::new(r"\{[^{}]*\}")?;

        let mut source_count = 0;
        let mut destination_count = 0;
        for found in placeholder.find_iter(&self.0) {
            match found.as_str() {
                SOURCE_PLACEHOLDER => source_count += 1,
                DESTINATION_PLACEHOLDER => destination_count += 1,
                other => {
                    return Err(anyhow!(
                        "Unknown placeholder {} in model template '{}'",
                        other,
                        self.0
                    ));
                }
            }
        }

        if source_count != 1 || destination_count != 1 {
            return Err(anyhow!(
                "Model template '{}' must contain {} and {} exactly once",
                self.0,
                SOURCE_PLACEHOLDER,
                DESTINATION_PLACEHOLDER
            ));
        }

        Ok(())
    }

    /// Build the model identifier for a pair of language codes
    pub fn resolve(&self, source_code: &str, destination_code: &str) -> String {
        self.0
            .replace(SOURCE_PLACEHOLDER, source_code)
            .replace(DESTINATION_PLACEHOLDER, destination_code)
    }
}

impl Default for ModelTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_TEMPLATE)
    }
}

impl fmt::Display for ModelTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
