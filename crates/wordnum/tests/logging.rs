use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wordnum::{
    Conversion, Converter, LoggerError, LoggingConfig, Region, SubRegion, Token, TokenClass,
    init_logging,
};

#[test]
#[serial]
fn unknown_level_is_rejected_before_install() {
    let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
    let err = init_logging(&config, false).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");
}

#[test]
#[serial]
fn debug_option_writes_compiled_regions_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log_dir = dir.path().join("logs");
    let config = LoggingConfig {
        level: "warn".to_owned(),
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        filter: None,
    };

    let logger = init_logging(&config, true)?;
    assert!(logger.writes_files());

    let text = "seven seas";
    let region = Region::new(0, 4, vec![SubRegion::single(Token::new(TokenClass::Unit, "seven"))]);
    let converter = Converter::builder().debug(true).build();
    assert_eq!(converter.convert(&[region], text)?, Conversion::Text("7 seas".to_owned()));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("Region compiled"), "region event should be logged: {contents}");
    assert!(contents.contains("Text converted"), "conversion event should be logged: {contents}");

    Ok(())
}
