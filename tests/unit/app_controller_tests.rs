/*!
 * Unit tests for the application controller.
 */

use codeshift::app_config::{Config, ServiceConfig, ServiceProvider};
use codeshift::app_controller::Controller;
use codeshift::providers::TranslationProvider;

fn rest_config() -> Config {
    Config {
        service: ServiceConfig {
            provider: ServiceProvider::Rest,
            endpoint: "https://translator.example.com/translate".to_string(),
            ..ServiceConfig::default()
        },
        ..Config::default()
    }
}

#[test]
fn test_isInitialized_withDefaultConfig_shouldBeTrue() {
    let controller = Controller::with_config(Config::default()).unwrap();
    assert!(controller.is_initialized());
}

#[test]
fn test_isInitialized_withMissingLanguages_shouldBeFalse() {
    let config = Config {
        source_language: String::new(),
        ..Config::default()
    };

    let controller = Controller::with_config(config).unwrap();
    assert!(!controller.is_initialized());
}

#[test]
fn test_buildProvider_withRestConfig_shouldUseRestClient() {
    let controller = Controller::with_config(rest_config()).unwrap();
    let provider = controller.build_provider().unwrap();
    assert_eq!(provider.name(), "rest");
}

#[test]
fn test_buildSession_withRestConfig_shouldStartFromConfiguredLanguages() {
    let controller = Controller::with_config(rest_config()).unwrap();
    let session = controller.build_session().unwrap();

    assert_eq!(session.state().source_language().as_str(), "javascript");
    assert_eq!(session.state().target_language().as_str(), "python");
}

#[test]
fn test_listLanguages_withDefaultConfig_shouldListCatalogInOrder() {
    let controller = Controller::with_config(Config::default()).unwrap();
    let listing = controller.list_languages().unwrap();

    let keys: Vec<&str> = listing
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(keys, vec!["javascript", "python", "java", "cpp"]);
}
