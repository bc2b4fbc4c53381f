use crate::error::Result;
use tracing::debug;
use wordnum_compiler::{Compiler, Conversion};
use wordnum_domain::config::Settings;
use wordnum_domain::{Language, Options, Region};
use wordnum_lexicon::Lexicon;

/// Converts the number regions of a text using fixed output options.
///
/// Cheap to clone; the word tables are shared.
#[derive(Debug, Clone)]
pub struct Converter {
    compiler: Compiler,
    options: Options,
}

impl Converter {
    /// Returns a [`ConverterBuilder`] with default options (English, text replacement).
    #[must_use = "The builder must be built to take effect."]
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// Converter over the built-in table of `options.language`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { compiler: Compiler::for_language(options.language), options }
    }

    /// Converter configured by the `[converter]` table of `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.converter)
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.compiler.language()
    }

    /// Converts `text` given its number `regions`, as produced upstream.
    ///
    /// # Errors
    /// Returns [`Error::Compile`](crate::Error::Compile) when any region fails;
    /// no partial result is produced.
    pub fn convert(&self, regions: &[Region], text: &str) -> Result<Conversion> {
        let conversion = self.compiler.assemble(regions, text, &self.options)?;
        if self.options.debug {
            debug!(regions = regions.len(), %conversion, "Text converted");
        }
        Ok(conversion)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Builder for [`Converter`].
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    options: Options,
    lexicon: Option<Lexicon>,
}

impl ConverterBuilder {
    #[must_use = "The builder must be built to take effect."]
    pub const fn language(mut self, language: Language) -> Self {
        self.options.language = language;
        self
    }

    /// Selects the language by name or code (`"portuguese"`, `"pt"`).
    ///
    /// # Errors
    /// Returns [`Error::Lexicon`](crate::Error::Lexicon) for an unknown language.
    pub fn language_name(mut self, name: &str) -> Result<Self> {
        let lexicon = Lexicon::from_name(name)?;
        self.options.language = lexicon.language();
        self.lexicon = Some(lexicon);
        Ok(self)
    }

    /// Uses a custom word table; its language replaces the configured one.
    #[must_use = "The builder must be built to take effect."]
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.options.language = lexicon.language();
        self.lexicon = Some(lexicon);
        self
    }

    /// Replaces all options at once.
    #[must_use = "The builder must be built to take effect."]
    pub const fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use = "The builder must be built to take effect."]
    pub const fn numbers_only(mut self, enabled: bool) -> Self {
        self.options.numbers_only = enabled;
        self
    }

    #[must_use = "The builder must be built to take effect."]
    pub const fn one_number(mut self, enabled: bool) -> Self {
        self.options.one_number = enabled;
        self
    }

    #[must_use = "The builder must be built to take effect."]
    pub const fn use_suffix(mut self, enabled: bool) -> Self {
        self.options.use_suffix = enabled;
        self
    }

    #[must_use = "The builder must be built to take effect."]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> Converter {
        let lexicon = self
            .lexicon
            .filter(|lexicon| lexicon.language() == self.options.language)
            .unwrap_or_else(|| Lexicon::shared(self.options.language));
        Converter { compiler: Compiler::new(lexicon), options: self.options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_builder_defaults() {
        let converter = Converter::builder().build();
        assert_eq!(converter.language(), Language::English);
        assert_eq!(*converter.options(), Options::default());
    }

    #[test]
    fn test_builder_options() {
        let converter = Converter::builder()
            .language(Language::German)
            .numbers_only(true)
            .use_suffix(true)
            .debug(true)
            .build();

        assert_eq!(converter.language(), Language::German);
        assert!(converter.options().numbers_only);
        assert!(converter.options().use_suffix);
        assert!(converter.options().debug);
        assert!(!converter.options().one_number);
    }

    #[test]
    fn test_language_name() {
        let converter = Converter::builder().language_name("PT").unwrap().build();
        assert_eq!(converter.language(), Language::Portuguese);

        let err = Converter::builder().language_name("klingon").unwrap_err();
        assert!(matches!(err, Error::Lexicon { .. }), "{err}");
    }

    #[test]
    fn test_later_language_overrides_lexicon() {
        let converter = Converter::builder()
            .lexicon(Lexicon::new(Language::Dutch))
            .language(Language::German)
            .build();
        assert_eq!(converter.language(), Language::German);
    }
}
