/*!
 * # codeshift - LLM-powered code translator
 *
 * A Rust library for translating code snippets between programming languages
 * using an LLM-backed translation service.
 *
 * ## Features
 *
 * - Translate code between the catalog languages (JavaScript, Python, Java, C++ by default)
 * - Session state machine with a single in-flight request and stale-response guard
 * - Markdown code-fence stripping of service output
 * - Copy-to-clipboard with a self-resetting "copied" indicator
 * - Pluggable service backends (Gemini, generic REST endpoint)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `languages`: Language catalog and validated language codes
 * - `session`: Session state machine and orchestration (the core)
 * - `formatting`: Code-fence stripping of service output
 * - `providers`: Client implementations for translation services:
 *   - `providers::gemini`: Gemini generateContent client
 *   - `providers::rest`: Generic REST endpoint client
 *   - `providers::mock`: Configurable provider for tests
 * - `notify`: Notification sink abstraction
 * - `clipboard`: Clipboard capability abstraction
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clipboard;
pub mod errors;
pub mod formatting;
pub mod languages;
pub mod notify;
pub mod providers;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ClipboardError, ProviderError, SessionError};
pub use formatting::strip_code_fences;
pub use languages::{LanguageCatalog, LanguageCode, LanguageEntry};
pub use providers::{TranslationProvider, TranslationRequest};
pub use session::{
    CopyOutcome, LanguageRole, RequestStatus, SessionState, TranslationSession,
};
