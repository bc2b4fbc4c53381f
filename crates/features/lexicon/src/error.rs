use std::borrow::Cow;

/// Failures while selecting or building a lexicon.
#[wordnum_derive::wordnum_error]
pub enum LexiconError {
    /// The language name or code has no table.
    #[error("Unknown language '{name}'{}", format_context(.context))]
    UnknownLanguage { name: String, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal lexicon error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
