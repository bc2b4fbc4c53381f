use serde_json::json;
use wordnum_domain::config::{LoggingConfig, Settings};
use wordnum_domain::{Language, Options};

#[test]
fn settings_defaults_are_sane() {
    let settings = Settings::default();
    assert_eq!(settings.converter, Options::default());
    assert_eq!(settings.converter.language, Language::English);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
}

#[test]
fn settings_deserialize_partial_tables() {
    let raw = json!({
        "converter": { "language": "nl", "numbers_only": true },
        "logging": { "level": "debug", "directory": "/tmp/wordnum" }
    });

    let settings: Settings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.converter.language, Language::Dutch);
    assert!(settings.converter.numbers_only);
    assert!(!settings.converter.one_number);
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.logging.console, "missing keys keep their defaults");
    assert_eq!(settings.logging.directory, Some(std::path::PathBuf::from("/tmp/wordnum")));
}

#[test]
fn settings_clone_on_write() {
    let original = Settings::default();
    let mut changed = original.clone();
    changed.converter.use_suffix = true;

    assert!(changed.converter.use_suffix);
    assert!(!original.converter.use_suffix, "mutation must not leak into shared clones");
}
