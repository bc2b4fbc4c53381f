use crate::error::{CompileError, Result};
use wordnum_domain::{Language, Token};
use wordnum_lexicon::{Lexicon, NumberLookup};

/// Semantic compiler bound to one word table.
///
/// Stateless apart from the lookup, so a single instance can serve any number
/// of calls and threads. The three stages are exposed separately:
/// [`Compiler::resolve`] for one subregion, [`Compiler::compile`] for one
/// region and [`Compiler::assemble`] for a whole text.
#[derive(Debug, Clone)]
pub struct Compiler<L = Lexicon> {
    lookup: L,
}

impl<L: NumberLookup> Compiler<L> {
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.lookup.language()
    }

    pub(crate) fn value_of(&self, token: &Token) -> Result<f64> {
        self.lookup.value_of(&token.literal).ok_or_else(|| CompileError::UnresolvedLiteral {
            literal: token.literal.clone(),
            language: self.lookup.language(),
            context: None,
        })
    }

    pub(crate) fn is_ordinal(&self, token: &Token) -> bool {
        self.lookup.is_ordinal(&token.literal)
    }
}

impl Compiler<Lexicon> {
    /// Compiler over the shared built-in table for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::new(Lexicon::shared(language))
    }
}

impl Default for Compiler<Lexicon> {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}
