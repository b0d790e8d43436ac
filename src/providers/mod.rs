/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the supported backends:
 * - Rest: generic code-translation HTTP endpoint
 * - Gemini: Google Gemini generateContent API
 * - Mock: configurable in-process provider for tests
 */

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::languages::LanguageCode;

/// One outbound translation request
///
/// Field names follow the service contract on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    /// The code snippet to translate
    #[serde(rename = "inputCode")]
    pub input_code: String,
    /// Language the snippet is written in
    #[serde(rename = "inputLang")]
    pub input_lang: LanguageCode,
    /// Language to translate into
    #[serde(rename = "outputLang")]
    pub output_lang: LanguageCode,
}

/// Common trait for all translation providers
///
/// Providers are used through `Arc<dyn TranslationProvider>` so the session
/// can stay agnostic of the backend; each implementation returns the raw
/// translated text (fence stripping happens in the session).
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate one code snippet
    ///
    /// # Arguments
    /// * `request` - The snippet and language pair to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw translated text or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;

    /// Name of the provider, for logging
    fn name(&self) -> &str;
}

pub mod gemini;
pub mod mock;
pub mod rest;
