/*!
 * Translation session core.
 *
 * This module holds the entire testable surface of the application:
 * - `SessionState`: a plain state container with pure transition functions
 *   for the `Idle -> Pending -> Succeeded/Failed` request lifecycle
 * - `TranslationSession`: the orchestrator that drives a provider call and
 *   reports outcomes to the notification sink and clipboard
 *
 * Only one request may be in flight; a `translate()` call while a request is
 * pending is rejected rather than racing the first. Requests are tagged with
 * the state generation they were issued against, so a response that arrives
 * after the session moved on (language changed, request cancelled) is
 * discarded instead of mutating stale state.
 */

use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::errors::{ClipboardError, SessionError};
use crate::formatting::strip_code_fences;
use crate::languages::{LanguageCatalog, LanguageCode};
use crate::notify::{Notification, Notifier};
use crate::providers::{TranslationProvider, TranslationRequest};

/// How long the cosmetic "copied" indicator stays lit
pub const COPIED_INDICATOR_TTL: Duration = Duration::from_secs(2);

/// Which language selector an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    /// The language the input code is written in
    Source,
    /// The language to translate into
    Target,
}

/// Lifecycle of the current translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request issued yet (or the last one was cancelled)
    #[default]
    Idle,
    /// Exactly one request is in flight
    Pending,
    /// The last request completed and its result is stored
    Succeeded,
    /// The last request failed; the result text is empty
    Failed,
}

/// Proof that a request was issued against a particular state generation
///
/// A ticket settles successfully only if the state has not been superseded
/// since the request went out.
#[derive(Debug)]
pub struct RequestTicket {
    generation: u64,
    /// The outbound request this ticket was issued for
    pub request: TranslationRequest,
}

/// Plain state container for one translator interaction
///
/// All transitions are pure and synchronous; nothing here touches the
/// network, so the state machine is testable without any I/O.
#[derive(Debug, Clone)]
pub struct SessionState {
    source_language: LanguageCode,
    target_language: LanguageCode,
    source_text: String,
    result_text: String,
    status: RequestStatus,
    generation: u64,
}

impl SessionState {
    /// Create a fresh state with the given language pair and empty text
    pub fn new(source_language: LanguageCode, target_language: LanguageCode) -> Self {
        Self {
            source_language,
            target_language,
            source_text: String::new(),
            result_text: String::new(),
            status: RequestStatus::Idle,
            generation: 0,
        }
    }

    /// Current source language
    pub fn source_language(&self) -> &LanguageCode {
        &self.source_language
    }

    /// Current target language
    pub fn target_language(&self) -> &LanguageCode {
        &self.target_language
    }

    /// Current input text
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Current translated text (empty unless `Succeeded`)
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Current request status
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Change one of the two languages
    ///
    /// Changing the source language clears the input text; changing the
    /// target clears the stored result. Either change supersedes an in-flight
    /// request: its eventual settlement will be discarded and the status
    /// drops back to `Idle`.
    pub fn set_language(&mut self, role: LanguageRole, code: LanguageCode) {
        self.generation += 1;
        if self.status == RequestStatus::Pending {
            self.status = RequestStatus::Idle;
        }

        match role {
            LanguageRole::Source => {
                self.source_language = code;
                self.source_text.clear();
            }
            LanguageRole::Target => {
                self.target_language = code;
                self.result_text.clear();
            }
        }
    }

    /// Replace the input text verbatim
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Start a translation request
    ///
    /// Empty or whitespace-only input is rejected without touching the
    /// status; a second request while one is pending is rejected as well.
    /// On success the status moves to `Pending`, the result is cleared, and
    /// the returned ticket carries the request to send.
    pub fn begin_request(&mut self) -> Result<RequestTicket, SessionError> {
        if self.source_text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.status == RequestStatus::Pending {
            return Err(SessionError::TranslationPending);
        }

        self.status = RequestStatus::Pending;
        self.result_text.clear();
        self.generation += 1;

        Ok(RequestTicket {
            generation: self.generation,
            request: TranslationRequest {
                input_code: self.source_text.clone(),
                input_lang: self.source_language.clone(),
                output_lang: self.target_language.clone(),
            },
        })
    }

    /// Apply a successful response for the given ticket
    ///
    /// Returns false (and leaves the state untouched) if the ticket is stale.
    pub fn settle_success(&mut self, ticket: &RequestTicket, text: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.status = RequestStatus::Succeeded;
        self.result_text = text.into();
        true
    }

    /// Record a failed response for the given ticket
    ///
    /// Returns false if the ticket is stale. The result text stays empty.
    pub fn settle_failure(&mut self, ticket: &RequestTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.status = RequestStatus::Failed;
        self.result_text.clear();
        true
    }

    /// Abandon the in-flight request, if any
    ///
    /// The pending ticket becomes stale and the status returns to `Idle`.
    /// A no-op in any other status.
    pub fn cancel(&mut self) {
        if self.status == RequestStatus::Pending {
            self.generation += 1;
            self.status = RequestStatus::Idle;
        }
    }
}

/// Outcome of a `copy_result` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The result text was placed on the clipboard
    Copied,
    /// There was no result text; the clipboard was not touched
    NothingToCopy,
}

/// One translator interaction, from language selection through zero or more
/// translate/copy operations
///
/// Owns the session state and the external capabilities (provider, notifier,
/// clipboard). All four error kinds are turned into notifications and state
/// transitions here; none are fatal and the session stays usable after any
/// failure.
#[derive(Debug)]
pub struct TranslationSession {
    catalog: LanguageCatalog,
    state: SessionState,
    provider: Arc<dyn TranslationProvider>,
    notifier: Arc<dyn Notifier>,
    clipboard: Box<dyn Clipboard>,
    copied_at: Option<Instant>,
}

impl TranslationSession {
    /// Create a session with the catalog's first two languages selected
    pub fn new(
        catalog: LanguageCatalog,
        provider: Arc<dyn TranslationProvider>,
        notifier: Arc<dyn Notifier>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let entries = catalog.entries();
        let source = entries[0].key.clone();
        let target = entries.get(1).map_or_else(|| source.clone(), |e| e.key.clone());

        Self {
            catalog,
            state: SessionState::new(source, target),
            provider,
            notifier,
            clipboard,
            copied_at: None,
        }
    }

    /// Create a session with an explicit language pair
    pub fn with_languages(
        catalog: LanguageCatalog,
        provider: Arc<dyn TranslationProvider>,
        notifier: Arc<dyn Notifier>,
        clipboard: Box<dyn Clipboard>,
        source: &str,
        target: &str,
    ) -> Result<Self, SessionError> {
        let source = catalog.resolve(source)?;
        let target = catalog.resolve(target)?;

        Ok(Self {
            catalog,
            state: SessionState::new(source, target),
            provider,
            notifier,
            clipboard,
            copied_at: None,
        })
    }

    /// Read access to the session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The language catalog this session was created with
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Select a language by catalog key
    pub fn set_language(&mut self, role: LanguageRole, key: &str) -> Result<(), SessionError> {
        let code = self.catalog.resolve(key)?;
        self.state.set_language(role, code);
        Ok(())
    }

    /// Replace the input text verbatim
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.state.set_source_text(text);
    }

    /// Translate the current input with the current language pair
    ///
    /// Issues exactly one outbound request. Empty input and re-entrant calls
    /// are rejected locally without contacting the service. A failed call
    /// leaves the session usable; the user may edit and retry.
    pub async fn translate(&mut self) -> Result<(), SessionError> {
        let ticket = match self.state.begin_request() {
            Ok(ticket) => ticket,
            Err(SessionError::EmptyInput) => {
                self.notifier
                    .notify(Notification::error("Input Code can't be empty", ""));
                return Err(SessionError::EmptyInput);
            }
            Err(e) => return Err(e),
        };

        debug!(
            "Issuing translation request via {}: {} -> {}",
            self.provider.name(),
            ticket.request.input_lang,
            ticket.request.output_lang
        );

        match self.provider.translate(&ticket.request).await {
            Ok(raw) => {
                let text = strip_code_fences(&raw);
                if !self.state.settle_success(&ticket, text) {
                    debug!("Discarding stale translation response");
                }
                Ok(())
            }
            Err(e) => {
                if self.state.settle_failure(&ticket) {
                    self.notifier
                        .notify(Notification::error("Translation failed", e.to_string()));
                } else {
                    debug!("Discarding stale translation failure");
                }
                Err(SessionError::Transport(e))
            }
        }
    }

    /// Abandon the in-flight request, if any
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Place the translated code on the clipboard
    ///
    /// With no result stored this is a no-op and the clipboard is never
    /// touched. A clipboard failure is reported distinctly from "nothing to
    /// copy" and does not affect the request state machine.
    pub fn copy_result(&mut self) -> Result<CopyOutcome, ClipboardError> {
        if self.state.result_text().is_empty() {
            return Ok(CopyOutcome::NothingToCopy);
        }

        match self.clipboard.write_text(self.state.result_text()) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                self.notifier.notify(Notification::info(
                    "Copied to clipboard",
                    "The translated code has been copied to your clipboard.",
                ));
                Ok(CopyOutcome::Copied)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(
                    "Failed to copy",
                    "There was an error copying the code to your clipboard.",
                ));
                Err(e)
            }
        }
    }

    /// Whether the copied indicator is still lit
    ///
    /// Cosmetic only: lights on a successful copy and expires on its own
    /// after [`COPIED_INDICATOR_TTL`].
    pub fn recently_copied(&self) -> bool {
        self.recently_copied_within(COPIED_INDICATOR_TTL)
    }

    /// Whether the last successful copy happened within the given window
    pub fn recently_copied_within(&self, ttl: Duration) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < ttl)
    }
}
