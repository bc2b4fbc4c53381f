//! # Compile Errors
//!
//! [`CompileError`] and the crate [`Result`] alias. Every failure is fatal to
//! the call that raised it: a bad subregion aborts its region, and a failed
//! region aborts the whole assembly.

use std::borrow::Cow;
use wordnum_domain::{Language, TokenClass};

#[wordnum_derive::wordnum_error]
pub enum CompileError {
    /// A unit, ten or hundred subregion did not hold exactly one token.
    ///
    /// Points at a segmentation bug upstream; the compiler never guesses.
    #[error(
        "Malformed {class} subregion: expected exactly one token, found {found}{}",
        format_context(.context)
    )]
    MalformedSubRegion { class: TokenClass, found: usize, context: Option<Cow<'static, str>> },

    /// A token literal is missing from the active lexicon.
    #[error("Unresolved literal '{literal}' in the {language} lexicon{}", format_context(.context))]
    UnresolvedLiteral { literal: String, language: Language, context: Option<Cow<'static, str>> },

    /// A region span is reversed, overlaps an earlier region, or runs past the text.
    #[error(
        "Invalid region span {start}..={end} for a text of {len} characters{}",
        format_context(.context)
    )]
    InvalidSpan { start: usize, end: usize, len: usize, context: Option<Cow<'static, str>> },

    /// An assembled numeral has no numeric prefix.
    #[error("Invalid numeral '{numeral}'{}", format_context(.context))]
    InvalidNumeral { numeral: String, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal compiler error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
