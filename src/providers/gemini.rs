use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Gemini client for interacting with the generateContent API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL
    base_url: String,
    /// Model name (e.g. "gemini-1.5-flash")
    model: String,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Conversation contents
    pub contents: Vec<GeminiContent>,

    /// Safety settings for the generation
    #[serde(rename = "safetySettings")]
    pub safety_settings: Vec<SafetySetting>,

    /// Generation parameters
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// One content block of a Gemini conversation
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Parts making up this content block
    pub parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text payload
    pub text: String,
}

/// Safety threshold for one harm category
#[derive(Debug, Serialize)]
pub struct SafetySetting {
    /// Harm category identifier
    pub category: String,
    /// Blocking threshold
    pub threshold: String,
}

/// Generation parameters for the Gemini API
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    /// Sequences that stop generation
    #[serde(rename = "stopSequences")]
    pub stop_sequences: Vec<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    /// Nucleus sampling mass
    #[serde(rename = "topP")]
    pub top_p: f32,
    /// Top-k sampling
    #[serde(rename = "topK")]
    pub top_k: u32,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// One generated candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Candidate content
    pub content: GeminiContent,
}

/// Build the translation prompt for a request
///
/// The prompt asks for idiomatic output in the target language with the
/// necessary imports and sparse comments, so the response needs no cleanup
/// beyond fence stripping.
pub fn build_prompt(request: &TranslationRequest) -> String {
    format!(
        "Translate the following code snippet to the specified target programming language.\n\
         \n\
         Instructions:\n\
         1. Add any required imports or headers for the target language (e.g., in C++ use #include <bits/stdc++.h> or other necessary headers).\n\
         2. Use concise, clean comments only where necessary to enhance understanding-avoid long explanations.\n\
         3. Follow clean code principles to ensure readability and maintainability in the translated code.\n\
         4. Optimize for best practices in the target language where appropriate.\n\
         5. Add proper error handlings.\n\
         Current Language: {}\n\
         Target Language: {}\n\
         Code Snippet to Translate: {}\n",
        request.input_lang, request.output_lang, request.input_code
    )
}

impl GeminiRequest {
    /// Create a generateContent request for a translation
    pub fn for_translation(request: &TranslationRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: build_prompt(request),
                }],
            }],
            safety_settings: vec![SafetySetting {
                category: "HARM_CATEGORY_DANGEROUS_CONTENT".to_string(),
                threshold: "BLOCK_ONLY_HIGH".to_string(),
            }],
            generation_config: GenerationConfig {
                stop_sequences: vec!["Title".to_string()],
                temperature: 1.0,
                max_output_tokens: 800,
                top_p: 0.8,
                top_k: 10,
            },
        }
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Gemini API key is empty".to_string(),
            ));
        }

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    /// Extract the generated text from a response
    pub fn extract_text(response: &GeminiResponse) -> Result<String, ProviderError> {
        response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| {
                ProviderError::ParseError("Gemini response contained no candidates".to_string())
            })
    }
}

#[async_trait]
impl TranslationProvider for Gemini {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let body = GeminiRequest::for_translation(request);

        let response = self
            .client
            .post(self.request_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let gemini_response = response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_text(&gemini_response)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
