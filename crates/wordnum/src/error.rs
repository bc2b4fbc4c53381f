use crate::config::ConfigError;
use std::borrow::Cow;
use wordnum_compiler::CompileError;
use wordnum_lexicon::LexiconError;
use wordnum_logger::LoggerError;

/// Any failure surfaced by the facade.
#[wordnum_derive::wordnum_error]
pub enum Error {
    #[error("Conversion failed{}: {source}", format_context(.context))]
    Compile { source: CompileError, context: Option<Cow<'static, str>> },

    #[error("Lexicon error{}: {source}", format_context(.context))]
    Lexicon { source: LexiconError, context: Option<Cow<'static, str>> },

    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logging error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
