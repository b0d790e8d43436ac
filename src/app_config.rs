use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::AppError;
use crate::languages::{LanguageCatalog, LanguageEntry};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default source language key
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Default target language key
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Languages offered by the translator, in display order
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageEntryConfig>,

    /// Translation service config
    #[serde(default)]
    pub service: ServiceConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// One catalog entry as it appears in the config file
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LanguageEntryConfig {
    /// Language key used on the wire
    pub key: String,
    /// Human-readable name
    pub label: String,
}

/// Translation service backend type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceProvider {
    // @provider: Google Gemini generateContent API
    #[default]
    Gemini,
    // @provider: Generic code-translation REST endpoint
    Rest,
}

impl ServiceProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Gemini",
            Self::Rest => "REST",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Gemini => "gemini".to_string(),
            Self::Rest => "rest".to_string(),
        }
    }
}

impl std::fmt::Display for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ServiceProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "rest" => Ok(Self::Rest),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    // @field: Provider type identifier
    #[serde(rename = "type", default)]
    pub provider: ServiceProvider,

    // @field: Service base URL (Gemini) or full endpoint URL (REST)
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    // @field: API key; GEMINI_API_KEY env var wins if set
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Model name
    #[serde(default = "default_gemini_model")]
    pub model: String,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            provider: ServiceProvider::default(),
            endpoint: default_gemini_endpoint(),
            api_key: String::new(),
            model: default_gemini_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// The API key to use: environment override first, then the config file
    pub fn resolved_api_key(&self) -> String {
        std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| self.api_key.clone())
    }
}

fn default_source_language() -> String {
    "javascript".to_string()
}

fn default_target_language() -> String {
    "python".to_string()
}

fn default_languages() -> Vec<LanguageEntryConfig> {
    LanguageCatalog::default()
        .entries()
        .iter()
        .map(|e| LanguageEntryConfig {
            key: e.key.as_str().to_string(),
            label: e.label.clone(),
        })
        .collect()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Normal output
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Everything
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            languages: default_languages(),
            service: ServiceConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Build the language catalog from the configured entries
    pub fn catalog(&self) -> Result<LanguageCatalog> {
        let entries = self
            .languages
            .iter()
            .map(|e| LanguageEntry::new(e.key.clone(), e.label.clone()))
            .collect();
        LanguageCatalog::new(entries).map_err(|e| anyhow!("invalid language catalog: {}", e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), AppError> {
        let catalog = self
            .catalog()
            .map_err(|e| AppError::Config(e.to_string()))?;

        catalog.resolve(&self.source_language).map_err(|_| {
            AppError::Config(format!(
                "source_language '{}' is not in the catalog",
                self.source_language
            ))
        })?;
        catalog.resolve(&self.target_language).map_err(|_| {
            AppError::Config(format!(
                "target_language '{}' is not in the catalog",
                self.target_language
            ))
        })?;

        if self.service.endpoint.is_empty() {
            return Err(AppError::Config("service endpoint cannot be empty".to_string()));
        }
        url::Url::parse(&self.service.endpoint).map_err(|e| {
            AppError::Config(format!(
                "invalid service endpoint '{}': {}",
                self.service.endpoint, e
            ))
        })?;

        if self.service.provider == ServiceProvider::Gemini
            && self.service.resolved_api_key().is_empty()
        {
            return Err(AppError::Config(
                "Gemini requires an API key (set service.api_key or GEMINI_API_KEY)".to_string(),
            ));
        }

        Ok(())
    }
}
