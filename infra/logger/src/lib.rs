//! # Logger
//!
//! Installs the global `tracing` subscriber for applications embedding the
//! `wordnum` converter. The library crates only emit events; nothing is
//! printed until a subscriber is installed through this crate (or any other).
//!
//! * Console output uses the compact formatter with ANSI colors.
//! * File output uses a rolling, non-blocking appender. Keep the returned
//!   [`Logger`] alive for as long as file logs should be flushed.
//! * `RUST_LOG` is honored unless an explicit [`LoggerBuilder::env_filter`] is set.
//!
//! ## Example
//!
//! ```rust
//! # use wordnum_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("wordnum")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//!
//! tracing::debug!("converter ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for the global tracing subscriber.
///
/// A name is mandatory: it prefixes rolling log files
/// (`<name>.<date>.log`) and is the first thing [`LoggerBuilder::init`] validates.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the logger name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    /// Minimum level emitted when no env filter overrides it.
    #[must_use = "The builder must be initialized to take effect."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Enables or disables console output.
    #[must_use = "The builder must be initialized to take effect."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes rolling log files into `directory` (created if missing).
    #[must_use = "The builder must be initialized to take effect."]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.directory = Some(directory.into());
        self
    }

    /// Rotation policy for file output.
    #[must_use = "The builder must be initialized to take effect."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Number of rotated files kept on disk.
    #[must_use = "The builder must be initialized to take effect."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Emits file output as JSON lines.
    #[must_use = "The builder must be initialized to take effect."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Explicit filter directives (e.g., `wordnum_compiler=trace,wordnum=debug`).
    ///
    /// Takes precedence over `RUST_LOG`. Invalid directives make
    /// [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be initialized to take effect."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }
}

impl LoggerBuilder<WithName> {
    /// Consumes the builder and installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   bad filter directives, or when no output is enabled.
    /// * [`LoggerError::Appender`] if the rolling appender cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let LoggerBuilder { config, name: WithName(name) } = self;
        validate_config(&config, &name)?;

        let env_filter = build_env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &config.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("creating {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(config.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(directory)
                    .context("building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled. Enable console or set a log directory.".into(),
                context: Some(name.into()),
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(level = %config.level, json = config.json, "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber.
///
/// Holds the non-blocking writer guard when file output is enabled; dropping
/// it flushes and stops the background writer.
#[must_use = "Dropping this handle stops background file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be initialized to take effect."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Whether file output (and therefore a background writer) is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if config.directory.is_some() && config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    match &config.env_filter {
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_builder_defaults() {
        let builder = Logger::builder().name("wordnum-test");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.max_files, DEFAULT_MAX_FILES);
        assert!(builder.config.directory.is_none());
        assert!(builder.config.env_filter.is_none());
    }

    #[test]
    fn test_builder_configuration() {
        let builder = Logger::builder()
            .name("wordnum-test")
            .console(false)
            .directory("logs")
            .max_files(3)
            .json(true)
            .env_filter("wordnum_compiler=trace")
            .level(LevelFilter::DEBUG);

        assert!(!builder.config.console);
        assert!(builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.max_files, 3);
        assert_eq!(builder.config.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(builder.config.env_filter.as_deref(), Some("wordnum_compiler=trace"));
    }

    #[test]
    #[serial]
    fn test_empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_no_output_is_rejected() {
        let err = Logger::builder().name("silent").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_bad_filter_is_rejected() {
        let err =
            Logger::builder().name("filtered").env_filter("wordnum=notalevel").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
