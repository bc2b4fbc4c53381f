use std::str::FromStr;
use wordnum_domain::config::LoggingConfig;
use wordnum_logger::{LevelFilter, Logger, LoggerError};

/// Name of the rolling log files (`wordnum.<date>.log`).
pub const LOGGER_NAME: &str = "wordnum";

/// Installs the global subscriber described by `config`.
///
/// `debug` (the converter's `debug` option) raises the level to at least
/// `DEBUG`, which makes every compiled region visible.
///
/// # Errors
/// * [`LoggerError::InvalidConfiguration`] for an unknown level, bad filter
///   directives or when neither console nor file output is enabled.
/// * Any other [`LoggerError`] raised while installing the subscriber.
pub fn init_logging(config: &LoggingConfig, debug: bool) -> Result<Logger, LoggerError> {
    let level = LevelFilter::from_str(config.level.trim()).map_err(|e| {
        LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{}': {e}", config.level).into(),
            context: Some("logging.level".into()),
        }
    })?;
    let level = if debug { level.max(LevelFilter::DEBUG) } else { level };

    let mut builder = Logger::builder()
        .name(LOGGER_NAME)
        .level(level)
        .console(config.console)
        .json(config.json);
    if let Some(directory) = &config.directory {
        builder = builder.directory(directory);
    }
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter);
    }

    builder.init()
}
