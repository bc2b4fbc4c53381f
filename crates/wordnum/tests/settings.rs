use std::fs;
use tempfile::tempdir;
use wordnum::config::{load_settings, load_settings_with_env};
use wordnum::{Converter, Error, Language};

const SETTINGS: &str = r#"
[converter]
language = "nl"
use_suffix = true

[logging]
level = "warn"
json = true
"#;

#[test]
fn loads_settings_from_a_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("wordnum.toml");
    fs::write(&path, SETTINGS)?;

    let settings = load_settings_with_env(Some(&path), Vec::new())?;
    assert_eq!(settings.converter.language, Language::Dutch);
    assert!(settings.converter.use_suffix);
    assert!(!settings.converter.numbers_only);
    assert_eq!(settings.logging.level, "warn");
    assert!(settings.logging.json);
    assert!(settings.logging.console, "unset keys keep their defaults");

    Ok(())
}

#[test]
fn environment_overrides_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("wordnum.toml");
    fs::write(&path, SETTINGS)?;

    let vars = [
        ("WORDNUM__CONVERTER__LANGUAGE", "portuguese"),
        ("WORDNUM__CONVERTER__NUMBERS_ONLY", "true"),
        ("WORDNUM__LOGGING__LEVEL", "debug"),
        ("UNRELATED__LOGGING__LEVEL", "error"),
    ]
    .map(|(key, value)| (key.to_owned(), value.to_owned()));

    let settings = load_settings_with_env(Some(&path), vars)?;
    assert_eq!(settings.converter.language, Language::Portuguese);
    assert!(settings.converter.numbers_only);
    assert!(settings.converter.use_suffix);
    assert_eq!(settings.logging.level, "debug");

    let converter = Converter::from_settings(&settings);
    assert_eq!(converter.language(), Language::Portuguese);

    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_settings(Some(dir.path().join("absent.toml"))).unwrap_err();
    let err = Error::from(err);
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("Failed to build settings"), "{err}");
}

#[test]
fn unknown_language_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("wordnum.toml");
    fs::write(&path, "[converter]\nlanguage = \"klingon\"\n")?;

    let err = load_settings_with_env(Some(&path), Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize settings"), "{err}");

    Ok(())
}
