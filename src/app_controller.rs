use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::{Config, ServiceProvider};
use crate::clipboard::SystemClipboard;
use crate::notify::LogNotifier;
use crate::providers::gemini::Gemini;
use crate::providers::rest::RestProvider;
use crate::providers::TranslationProvider;
use crate::session::{CopyOutcome, LanguageRole, TranslationSession};

// @module: Application controller wiring config, provider and session

/// Main application controller for one-shot code translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Build the provider named in the configuration
    pub fn build_provider(&self) -> Result<Arc<dyn TranslationProvider>> {
        let service = &self.config.service;
        let provider: Arc<dyn TranslationProvider> = match service.provider {
            ServiceProvider::Gemini => Arc::new(
                Gemini::new(
                    service.resolved_api_key(),
                    service.endpoint.clone(),
                    service.model.clone(),
                    service.timeout_secs,
                )
                .context("Failed to create Gemini client")?,
            ),
            ServiceProvider::Rest => Arc::new(
                RestProvider::new(service.endpoint.clone(), service.timeout_secs)
                    .context("Failed to create REST client")?,
            ),
        };
        debug!("Using {} provider", service.provider.display_name());
        Ok(provider)
    }

    /// Build a session wired to the system clipboard and log notifier
    pub fn build_session(&self) -> Result<TranslationSession> {
        let catalog = self.config.catalog()?;
        let provider = self.build_provider()?;

        TranslationSession::with_languages(
            catalog,
            provider,
            Arc::new(LogNotifier),
            Box::new(SystemClipboard::new()),
            &self.config.source_language,
            &self.config.target_language,
        )
        .context("Failed to create translation session")
    }

    /// Translate one snippet and return the result
    ///
    /// Language overrides, when given, replace the configured defaults before
    /// the input is set (language changes clear text fields).
    pub async fn run(
        &self,
        input: String,
        source_override: Option<&str>,
        target_override: Option<&str>,
        copy_to_clipboard: bool,
    ) -> Result<String> {
        let start_time = std::time::Instant::now();
        let mut session = self.build_session()?;

        if let Some(source) = source_override {
            session
                .set_language(LanguageRole::Source, source)
                .with_context(|| format!("Unsupported source language: {}", source))?;
        }
        if let Some(target) = target_override {
            session
                .set_language(LanguageRole::Target, target)
                .with_context(|| format!("Unsupported target language: {}", target))?;
        }

        info!(
            "Translating {} -> {}",
            session.state().source_language(),
            session.state().target_language()
        );

        session.set_source_text(input);
        session.translate().await.context("Translation failed")?;

        if copy_to_clipboard {
            match session.copy_result() {
                Ok(CopyOutcome::Copied) => debug!("Result copied to clipboard"),
                Ok(CopyOutcome::NothingToCopy) => debug!("No result to copy"),
                // Already notified; a clipboard failure should not fail the run
                Err(e) => debug!("Clipboard write failed: {}", e),
            }
        }

        info!(
            "Translation finished in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );
        Ok(session.state().result_text().to_string())
    }

    /// List the configured languages as `key<TAB>label` lines
    pub fn list_languages(&self) -> Result<String> {
        let catalog = self.config.catalog()?;
        let mut out = String::new();
        for entry in catalog.entries() {
            out.push_str(&format!("{}\t{}\n", entry.key, entry.label));
        }
        Ok(out)
    }
}
