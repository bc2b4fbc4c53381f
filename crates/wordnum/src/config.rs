use config::{Config, Environment, File};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;
use wordnum_domain::config::Settings;

/// Base name of the settings file looked up when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "wordnum";
/// Prefix of environment overrides (`WORDNUM__CONVERTER__LANGUAGE=dutch`).
pub const ENV_PREFIX: &str = "WORDNUM";

/// Error type for settings loading.
#[wordnum_derive::wordnum_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads [`Settings`] from a file with environment overrides on top.
///
/// Layering:
/// 1. **File**: `path` when given (must exist), otherwise `wordnum.{toml,json,yaml,..}`
///    in the working directory if present. The format follows the extension.
/// 2. **Environment**: variables prefixed with `WORDNUM__`, nesting with `__`
///    (`WORDNUM__LOGGING__LEVEL=debug` sets `logging.level`).
///
/// Missing keys keep their defaults, so an empty source yields
/// [`Settings::default`].
///
/// # Errors
/// * A given `path` does not exist or cannot be parsed.
/// * A value does not fit its field (e.g., an unknown language).
///
/// # Example
/// ```rust
/// use wordnum::config::load_settings;
///
/// let settings = load_settings(None::<&str>).unwrap_or_default();
/// assert!(!settings.converter.numbers_only);
/// ```
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Settings, ConfigError> {
    load(path, environment())
}

/// Like [`load_settings`], but reads overrides from `vars` instead of the
/// process environment.
///
/// # Errors
/// Same as [`load_settings`].
pub fn load_settings_with_env<I>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<Settings, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    load(path, environment().source(Some(vars.into_iter().collect())))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true)
}

fn load(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<Settings, ConfigError> {
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment);

    info!("Loading settings from {}", effective_path.display());

    let settings = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
