use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Source language of the number words; selects the lexical table.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    #[strum(to_string = "english", serialize = "en")]
    English,
    #[serde(alias = "nl")]
    #[strum(to_string = "dutch", serialize = "nl")]
    Dutch,
    #[serde(alias = "de")]
    #[strum(to_string = "german", serialize = "de")]
    German,
    #[serde(alias = "pt")]
    #[strum(to_string = "portuguese", serialize = "pt")]
    Portuguese,
}

/// Output options for one conversion call.
///
/// `numbers_only` wins over `one_number`; with neither set the result is a
/// single number when one region covers the whole text and the rewritten text
/// otherwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Return one number per region.
    pub numbers_only: bool,
    /// Glue every region's numeral into a single number.
    pub one_number: bool,
    /// Append English ordinal suffixes ("1st", "22nd") when rewriting text.
    pub use_suffix: bool,
    /// Raise the log level of the converter to `DEBUG`.
    pub debug: bool,
    pub language: Language,
}

impl Options {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { numbers_only: false, one_number: false, use_suffix: false, debug: false, language }
    }

    #[must_use]
    pub const fn numbers_only(mut self, enabled: bool) -> Self {
        self.numbers_only = enabled;
        self
    }

    #[must_use]
    pub const fn one_number(mut self, enabled: bool) -> Self {
        self.one_number = enabled;
        self
    }

    #[must_use]
    pub const fn use_suffix(mut self, enabled: bool) -> Self {
        self.use_suffix = enabled;
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}
