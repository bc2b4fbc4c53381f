use crate::options::Options;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level settings of an application embedding the converter.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsInner {
    pub converter: Options,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(flatten, default)]
    inner: Arc<SettingsInner>,
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Settings {
    fn deref_mut(&mut self) -> &mut SettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; no file output when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Explicit filter directives, overriding `RUST_LOG`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, directory: None, json: false, filter: None }
    }
}
