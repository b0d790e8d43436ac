/*!
 * Tests for the language catalog
 */

use codeshift::errors::SessionError;
use codeshift::{LanguageCatalog, LanguageCode, LanguageEntry};

#[test]
fn test_defaultCatalog_shouldContainFourLanguagesInOrder() {
    let catalog = LanguageCatalog::default();
    let keys: Vec<&str> = catalog.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["javascript", "python", "java", "cpp"]);
}

#[test]
fn test_resolve_withKnownKey_shouldReturnCode() {
    let catalog = LanguageCatalog::default();
    let code = catalog.resolve("python").unwrap();
    assert_eq!(code.as_str(), "python");
}

#[test]
fn test_resolve_shouldNormalizeCaseAndWhitespace() {
    let catalog = LanguageCatalog::default();
    assert_eq!(catalog.resolve("  Python ").unwrap().as_str(), "python");
    assert_eq!(catalog.resolve("CPP").unwrap().as_str(), "cpp");
}

#[test]
fn test_resolve_withUnknownKey_shouldReturnUnknownLanguage() {
    let catalog = LanguageCatalog::default();
    let result = catalog.resolve("cobol");
    assert!(matches!(result, Err(SessionError::UnknownLanguage(_))));
}

#[test]
fn test_newCatalog_withEmptyList_shouldFail() {
    assert!(LanguageCatalog::new(vec![]).is_err());
}

#[test]
fn test_newCatalog_withDuplicateKeys_shouldFail() {
    let entries = vec![
        LanguageEntry::new("rust", "Rust"),
        LanguageEntry::new("go", "Go"),
        LanguageEntry::new("Rust", "Rust again"),
    ];
    assert!(LanguageCatalog::new(entries).is_err());
}

#[test]
fn test_newCatalog_shouldPreserveSuppliedOrder() {
    let entries = vec![
        LanguageEntry::new("go", "Go"),
        LanguageEntry::new("rust", "Rust"),
    ];
    let catalog = LanguageCatalog::new(entries).unwrap();
    let keys: Vec<&str> = catalog.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["go", "rust"]);
}

#[test]
fn test_label_shouldReturnDisplayName() {
    let catalog = LanguageCatalog::default();
    let cpp = catalog.resolve("cpp").unwrap();
    assert_eq!(catalog.label(&cpp), Some("C++"));
    assert_eq!(catalog.label(&LanguageCode::new("cobol")), None);
}

#[test]
fn test_contains_shouldMatchNormalizedCodes() {
    let catalog = LanguageCatalog::default();
    assert!(catalog.contains(&LanguageCode::new("Java")));
    assert!(!catalog.contains(&LanguageCode::new("kotlin")));
}
