/*!
 * Error types for the codeshift application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when sending the API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors produced by the translation session state machine
#[derive(Error, Debug)]
pub enum SessionError {
    /// The user attempted to translate with no source code
    #[error("input code is empty")]
    EmptyInput,

    /// A translation request is already in flight
    #[error("a translation request is already pending")]
    TranslationPending,

    /// A language code not present in the catalog was supplied
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// The outbound call failed or returned an unusable response
    #[error("translation failed: {0}")]
    Transport(#[from] ProviderError),
}

/// Errors raised by the clipboard capability
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Writing to the clipboard was rejected
    #[error("failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a configuration problem
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the session state machine
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from the clipboard
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
