/*!
 * Notification sink abstraction.
 *
 * The session reports user-facing events (empty input, copy outcome,
 * translation failure) through a `Notifier` rather than rendering anything
 * itself. The CLI wires in a logger-backed sink; tests record events.
 */

use log::{error, info};
use std::fmt::Debug;

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational event (e.g. copy succeeded)
    Info,
    /// Something went wrong and the user should know
    Error,
}

/// A single human-readable event
#[derive(Debug, Clone)]
pub struct Notification {
    /// Presentation severity
    pub severity: Severity,
    /// Short headline
    pub title: String,
    /// Longer description, may be empty
    pub message: String,
}

impl Notification {
    /// Create an informational notification
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink for session notifications
pub trait Notifier: Send + Sync + Debug {
    /// Deliver one notification
    fn notify(&self, notification: Notification);
}

/// Notifier that forwards events to the `log` facade
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                if notification.message.is_empty() {
                    info!("{}", notification.title);
                } else {
                    info!("{}: {}", notification.title, notification.message);
                }
            }
            Severity::Error => {
                if notification.message.is_empty() {
                    error!("{}", notification.title);
                } else {
                    error!("{}: {}", notification.title, notification.message);
                }
            }
        }
    }
}
