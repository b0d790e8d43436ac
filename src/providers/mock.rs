/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::fenced()` - Succeeds with a fence-wrapped response
 * - `MockProvider::failing()` - Always fails with an API error
 * - `MockProvider::slow(ms)` - Succeeds after a delay
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a plain translation
    Working,
    /// Succeeds with the translation wrapped in Markdown fences
    Fenced,
    /// Always fails with an API error
    Failing,
    /// Fails the first request, then succeeds
    FailOnce,
    /// Simulates a slow response
    Slow { delay_ms: u64 },
}

/// Mock provider for testing session behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of requests received
    request_count: Arc<AtomicUsize>,
    /// Requests received, in order
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslationRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock whose responses carry Markdown code fences
    pub fn fenced() -> Self {
        Self::new(MockBehavior::Fenced)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that fails once, then succeeds
    pub fn fail_once() -> Self {
        Self::new(MockBehavior::FailOnce)
    }

    /// Create a mock that succeeds after the given delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests this provider has received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Copies of all received requests, in order
    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().expect("mock requests lock").clone()
    }

    fn default_response(request: &TranslationRequest) -> String {
        format!("// translated to {}\n{}", request.output_lang, request.input_code)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("mock requests lock")
            .push(request.clone());

        match self.behavior {
            MockBehavior::Working => {
                if let Some(generator) = self.custom_response {
                    Ok(generator(request))
                } else {
                    Ok(Self::default_response(request))
                }
            }

            MockBehavior::Fenced => Ok(format!(
                "```{}\n{}\n```",
                request.output_lang,
                Self::default_response(request)
            )),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::FailOnce => {
                if count == 0 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: "Simulated transient failure".to_string(),
                    })
                } else {
                    Ok(Self::default_response(request))
                }
            }

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(Self::default_response(request))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
