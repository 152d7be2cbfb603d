/*!
 * Common test utilities for the mtbridge test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mtbridge::app_config::{Config, TranslationConfig};
use mtbridge::app_controller::Controller;
use mtbridge::providers::mock::MockBackend;
use mtbridge::translation::TranslationRequestHandler;

/// Route library log output through the test harness
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Handler over the default configuration and the given mock
pub fn default_handler(backend: &MockBackend) -> TranslationRequestHandler {
    init_test_logging();
    TranslationRequestHandler::new(TranslationConfig::default(), Box::new(backend.clone()))
        .expect("default configuration should be valid")
}

/// Controller over the default configuration and the given mock
pub fn default_controller(backend: &MockBackend) -> Controller {
    init_test_logging();
    Controller::with_backend(Config::default(), Box::new(backend.clone()))
        .expect("default configuration should be valid")
}
