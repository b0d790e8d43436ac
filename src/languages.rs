use serde::{Deserialize, Serialize};

use crate::errors::SessionError;

/// Language catalog for programming language identifiers
///
/// The catalog is an ordered list of `{ key, label }` entries supplied once at
/// startup (from configuration or the built-in defaults). Session code never
/// constructs a `LanguageCode` on its own; codes are resolved through the
/// catalog so that only supported languages can be selected.
/// A validated programming-language identifier (e.g. `javascript`, `cpp`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a code from a raw key, normalizing case and whitespace
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_lowercase())
    }

    /// The normalized key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable language: normalized key plus display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language key used on the wire
    pub key: LanguageCode,
    /// Human-readable name shown in selectors
    pub label: String,
}

impl LanguageEntry {
    /// Create an entry from a raw key and label
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: LanguageCode::new(key),
            label: label.into(),
        }
    }
}

/// Ordered, immutable set of languages the translator offers
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    /// Build a catalog from a list of entries
    ///
    /// Fails on an empty list or duplicate keys; order is preserved.
    pub fn new(entries: Vec<LanguageEntry>) -> Result<Self, SessionError> {
        if entries.is_empty() {
            return Err(SessionError::UnknownLanguage(
                "language catalog is empty".to_string(),
            ));
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(SessionError::UnknownLanguage(format!(
                    "duplicate language key: {}",
                    entry.key
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Resolve a raw key against the catalog
    pub fn resolve(&self, key: &str) -> Result<LanguageCode, SessionError> {
        let code = LanguageCode::new(key);
        if self.contains(&code) {
            Ok(code)
        } else {
            Err(SessionError::UnknownLanguage(key.trim().to_string()))
        }
    }

    /// Whether the catalog contains the given code
    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.entries.iter().any(|e| &e.key == code)
    }

    /// Display label for a code, if present
    pub fn label(&self, code: &LanguageCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.key == code)
            .map(|e| e.label.as_str())
    }

    /// All entries, in catalog order
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                LanguageEntry::new("javascript", "JavaScript"),
                LanguageEntry::new("python", "Python"),
                LanguageEntry::new("java", "Java"),
                LanguageEntry::new("cpp", "C++"),
            ],
        }
    }
}
