use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Client for a generic code-translation HTTP endpoint
///
/// The endpoint accepts `{ inputCode, inputLang, outputLang }` and answers
/// `{ output }`. Any non-2xx status, network error, or malformed body is an
/// error; individual status codes are not interpreted.
#[derive(Debug)]
pub struct RestProvider {
    /// Full URL of the translation endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

/// Success response body from the endpoint
#[derive(Debug, Deserialize)]
pub struct RestResponse {
    /// Translated code, possibly fence-wrapped
    pub output: String,
}

impl RestProvider {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, ProviderError> {
        let endpoint = endpoint.into();
        url::Url::parse(&endpoint)
            .map_err(|e| ProviderError::RequestFailed(format!("invalid endpoint URL: {}", e)))?;

        Ok(Self {
            endpoint,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        })
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationProvider for RestProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let parsed: RestResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.output)
    }

    fn name(&self) -> &str {
        "rest"
    }
}
