/*!
 * Mock backend implementation for testing.
 *
 * This module provides a mock backend that simulates different behaviors:
 * - `MockBackend::working()` - Always succeeds with one candidate
 * - `MockBackend::multiple_candidates(n)` - Succeeds with several candidates
 * - `MockBackend::failing()` - Always fails with an error
 * - `MockBackend::empty()` - Answers without any candidate
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// One call received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub model_identifier: String,
    pub text: String,
}

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with `[<model>] <text>`
    Working,
    /// Succeeds with `count` candidates, candidate i is `[<model>#i] <text>`
    MultipleCandidates { count: usize },
    /// Always fails with an API error
    Failing,
    /// Succeeds with zero candidates
    Empty,
    /// Succeeds with a single empty candidate
    Blank,
}

/// Mock backend for testing handler behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Calls received so far, shared between clones
    calls: Arc<Mutex<Vec<MockCall>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn multiple_candidates(count: usize) -> Self {
        Self::new(MockBehavior::MultipleCandidates { count })
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    pub fn blank() -> Self {
        Self::new(MockBehavior::Blank)
    }

    /// Set a custom response generator, called with (model identifier, text)
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Snapshot of the calls received so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn render(&self, model_identifier: &str, text: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(model_identifier, text),
            None => format!("[{}] {}", model_identifier, text),
        }
    }
}

impl Clone for MockBackend {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            calls: Arc::clone(&self.calls),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(&self, model_identifier: &str, text: &str) -> Result<Vec<String>, ProviderError> {
        self.calls.lock().push(MockCall {
            model_identifier: model_identifier.to_string(),
            text: text.to_string(),
        });

        match self.behavior {
            MockBehavior::Working => Ok(vec![self.render(model_identifier, text)]),

            MockBehavior::MultipleCandidates { count } => Ok((0..count)
                .map(|i| format!("[{}#{}] {}", model_identifier, i, text))
                .collect()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated backend failure".to_string(),
            }),

            MockBehavior::Empty => Ok(Vec::new()),

            MockBehavior::Blank => Ok(vec![String::new()]),
        }
    }
}
