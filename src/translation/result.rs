/*!
 * Translation result record and its JSON encoding.
 *
 * A `TranslationResult` is built once per request and never changes afterwards.
 * `succeeded` is true exactly when `translated_text` is present; the
 * constructors and the deserializer both enforce this.
 */

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::ser::PrettyFormatter;

use crate::errors::TranslationError;

/// Message attached to every successful translation
pub const SUCCESS_MESSAGE: &str = "Text was translated successfully";

/// Outcome of a single translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTranslationResult")]
pub struct TranslationResult {
    source_language: String,
    destination_language: String,
    original_text: String,
    translated_text: Option<String>,
    succeeded: bool,
    message: String,
}

/// Wire shape before the success invariant is checked
#[derive(Deserialize)]
struct RawTranslationResult {
    source_language: String,
    destination_language: String,
    original_text: String,
    translated_text: Option<String>,
    succeeded: bool,
    message: String,
}

impl TryFrom<RawTranslationResult> for TranslationResult {
    type Error = String;

    fn try_from(raw: RawTranslationResult) -> Result<Self, Self::Error> {
        if raw.succeeded != raw.translated_text.is_some() {
            return Err(format!(
                "inconsistent record: succeeded is {} but translated_text is {}",
                raw.succeeded,
                if raw.translated_text.is_some() { "present" } else { "null" }
            ));
        }

        Ok(Self {
            source_language: raw.source_language,
            destination_language: raw.destination_language,
            original_text: raw.original_text,
            translated_text: raw.translated_text,
            succeeded: raw.succeeded,
            message: raw.message,
        })
    }
}

impl TranslationResult {
    /// Record for a completed translation
    pub fn success(
        source_language: impl Into<String>,
        destination_language: impl Into<String>,
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            destination_language: destination_language.into(),
            original_text: original_text.into(),
            translated_text: Some(translated_text.into()),
            succeeded: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Record for a request that produced no translation
    pub fn failure(
        source_language: impl Into<String>,
        destination_language: impl Into<String>,
        original_text: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            destination_language: destination_language.into(),
            original_text: original_text.into(),
            translated_text: None,
            succeeded: false,
            message: message.into(),
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn destination_language(&self) -> &str {
        &self.destination_language
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn translated_text(&self) -> Option<&str> {
        self.translated_text.as_deref()
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serialize this record, see [`to_json`]
    pub fn to_json(&self) -> String {
        to_json(self)
    }
}

/// Serialize a result as pretty JSON with four-space indentation.
///
/// Non-ASCII text is written verbatim. If encoding fails, a failure-shaped
/// payload describing the error is returned instead; this never panics.
pub fn to_json(result: &TranslationResult) -> String {
    encode_or_fallback(result, result)
}

/// Encode `value`, falling back to a failure payload derived from `result`
pub(crate) fn encode_or_fallback<T: Serialize + ?Sized>(value: &T, result: &TranslationResult) -> String {
    match encode_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            warn!("Falling back to failure payload: {}", e);
            serialization_failure_payload(result, &e)
        }
    }
}

fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, TranslationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| TranslationError::Serialization(e.to_string()))
}

// Built only from the record in hand.
fn serialization_failure_payload(result: &TranslationResult, error: &TranslationError) -> String {
    let payload = json!({
        "source_language": result.source_language(),
        "destination_language": result.destination_language(),
        "original_text": result.original_text(),
        "translated_text": null,
        "succeeded": false,
        "message": format!("Failed to serialize translation result: {}", error),
    });

    encode_pretty(&payload).unwrap_or_else(|_| payload.to_string())
}
