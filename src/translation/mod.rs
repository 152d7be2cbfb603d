/*!
 * Translation request handling.
 *
 * - `handler`: validates language pairs and dispatches to a backend
 * - `model`: model identifier templates
 * - `result`: the result record and its JSON encoding
 */

// Re-export main types for easier usage
pub use self::handler::TranslationRequestHandler;
pub use self::model::ModelTemplate;
pub use self::result::TranslationResult;

// Submodules
pub mod handler;
pub mod model;
pub mod result;
