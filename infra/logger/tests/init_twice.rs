use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wordnum_logger::{Logger, LoggerError};

#[test]
fn second_install_keeps_the_first_file_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let first_dir = tmp_dir.path().join("first");
    let second_dir = tmp_dir.path().join("second");

    let logger = Logger::builder().name("wordnum").console(false).directory(&first_dir).init()?;

    let Err(err) = Logger::builder().name("wordnum").console(false).directory(&second_dir).init()
    else {
        panic!("a second global subscriber must be refused");
    };
    assert!(matches!(err, LoggerError::Subscriber { .. }), "{err}");

    tracing::info!(regions = 2, "Text converted");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let written: String = fs::read_dir(&first_dir)?
        .flatten()
        .filter_map(|entry| fs::read_to_string(entry.path()).ok())
        .collect();
    assert!(written.contains("Text converted"), "first logger should still write: {written}");

    Ok(())
}
