/*!
 * # mtbridge - Opus-MT translation requests as JSON records
 *
 * A Rust library that wraps pretrained Helsinki-NLP Opus-MT translation models
 * behind a small, validated request API.
 *
 * ## Features
 *
 * - Language pair allow-list (English -> Hebrew, Hebrew -> Russian by default)
 * - Model identifier resolution from a configurable template
 * - Hugging Face inference API backend
 * - JSON result records with non-ASCII text preserved
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: Request handling:
 *   - `translation::handler`: Pair validation and backend dispatch
 *   - `translation::model`: Model identifier templates
 *   - `translation::result`: Result record and JSON encoding
 * - `app_controller`: Main application controller
 * - `language_utils`: Language table and pairs
 * - `providers`: Translation backends:
 *   - `providers::huggingface`: Hugging Face inference API client
 *   - `providers::mock`: In-process backend for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use translation::{TranslationRequestHandler, TranslationResult};
pub use language_utils::{Language, LanguagePair};
pub use errors::{AppError, ProviderError, TranslationError};
