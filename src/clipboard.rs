/*!
 * Clipboard capability abstraction.
 *
 * The session only needs `write_text`; the production implementation uses the
 * system clipboard via arboard, and tests substitute an in-memory one.
 */

use std::fmt::Debug;

use crate::errors::ClipboardError;

/// External capability for placing text on the clipboard
pub trait Clipboard: Send + Debug {
    /// Write the given text to the clipboard
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard
///
/// The platform handle is opened per write; keeping it open for the process
/// lifetime holds the clipboard selection on some platforms.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a new system clipboard handle
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
