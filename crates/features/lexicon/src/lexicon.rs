use crate::error::LexiconError;
use crate::tables::{Table, table};
use fxhash::{FxHashMap, FxHashSet};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use strum::IntoEnumIterator;
use tracing::debug;
use wordnum_domain::{Language, Token, TokenClass};

/// Resolves number words to values.
///
/// The compiler only depends on this trait, so tests and embedders can supply
/// their own tables.
pub trait NumberLookup {
    /// Numeric value of a lowercased literal, if the word is known.
    fn value_of(&self, literal: &str) -> Option<f64>;

    /// Language the table belongs to (reported in lookup errors).
    fn language(&self) -> Language;

    /// Whether the literal is an ordinal form ("third", "twintigste").
    fn is_ordinal(&self, _literal: &str) -> bool {
        false
    }
}

impl<T: NumberLookup + ?Sized> NumberLookup for &T {
    fn value_of(&self, literal: &str) -> Option<f64> {
        (**self).value_of(literal)
    }

    fn language(&self) -> Language {
        (**self).language()
    }

    fn is_ordinal(&self, literal: &str) -> bool {
        (**self).is_ordinal(literal)
    }
}

/// One known word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub class: TokenClass,
    pub value: f64,
    pub ordinal: bool,
}

#[derive(Debug)]
struct LexiconInner {
    language: Language,
    words: FxHashMap<&'static str, Entry>,
    decimal_separators: FxHashSet<&'static str>,
    joiners: FxHashSet<&'static str>,
}

/// Read-only word table for a single language.
///
/// Cheap to clone (the tables sit behind an [`Arc`]) and safe to share across
/// threads. Use [`Lexicon::shared`] to reuse the process-wide instance instead
/// of rebuilding the hash maps.
#[derive(Debug, Clone)]
pub struct Lexicon {
    inner: Arc<LexiconInner>,
}

static SHARED: LazyLock<Vec<Lexicon>> =
    LazyLock::new(|| Language::iter().map(Lexicon::new).collect());

impl Lexicon {
    /// Builds the tables for `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let table = table(language);
        let words = index(table);
        debug!(%language, words = words.len(), "Lexicon built");

        Self {
            inner: Arc::new(LexiconInner {
                language,
                words,
                decimal_separators: table.decimal_separators.iter().copied().collect(),
                joiners: table.joiners.iter().copied().collect(),
            }),
        }
    }

    /// Process-wide instance for `language`, built on first use.
    #[must_use]
    pub fn shared(language: Language) -> Self {
        SHARED
            .iter()
            .find(|lexicon| lexicon.language() == language)
            .cloned()
            .unwrap_or_else(|| Self::new(language))
    }

    /// Looks a language up by name or code (`"dutch"`, `"nl"`, case-insensitive).
    ///
    /// # Errors
    /// Returns [`LexiconError::UnknownLanguage`] when no table exists for `name`.
    pub fn from_name(name: &str) -> Result<Self, LexiconError> {
        Language::from_str(name.trim())
            .map(Self::shared)
            .map_err(|_| LexiconError::UnknownLanguage { name: name.to_owned(), context: None })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.inner.language
    }

    /// Full entry for a word; decimal separators and joiners are not entries.
    #[must_use]
    pub fn entry(&self, literal: &str) -> Option<Entry> {
        self.inner.words.get(literal).copied()
    }

    /// Class the tokenizer should give `word`, if it belongs to a number phrase.
    #[must_use]
    pub fn classify(&self, word: &str) -> Option<TokenClass> {
        let word = word.to_lowercase();
        if self.inner.decimal_separators.contains(word.as_str()) {
            return Some(TokenClass::DecimalSeparator);
        }
        self.entry(&word).map(|entry| entry.class)
    }

    /// Builds a classified token for `word`, or `None` for non-number words.
    #[must_use]
    pub fn token(&self, word: &str) -> Option<Token> {
        self.classify(word).map(|class| Token::new(class, word))
    }

    /// Filler words allowed between number words ("and", "en", "und", "e").
    #[must_use]
    pub fn is_joiner(&self, word: &str) -> bool {
        self.inner.joiners.contains(word.to_lowercase().as_str())
    }

    #[must_use]
    pub fn decimal_separators(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.decimal_separators.iter().copied()
    }

    /// Number of value-bearing words in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.words.len()
    }
}

impl NumberLookup for Lexicon {
    fn value_of(&self, literal: &str) -> Option<f64> {
        self.entry(literal).map(|entry| entry.value)
    }

    fn language(&self) -> Language {
        self.inner.language
    }

    fn is_ordinal(&self, literal: &str) -> bool {
        self.entry(literal).is_some_and(|entry| entry.ordinal)
    }
}

fn index(table: &'static Table) -> FxHashMap<&'static str, Entry> {
    let ordinals: FxHashSet<&str> = table.ordinals.iter().copied().collect();
    let groups = [
        (TokenClass::Unit, table.units),
        (TokenClass::Ten, table.tens),
        (TokenClass::Hundred, table.hundreds),
        (TokenClass::Magnitude, table.magnitudes),
    ];

    groups
        .into_iter()
        .flat_map(|(class, words)| words.iter().map(move |&(word, value)| (class, word, value)))
        .map(|(class, word, value)| {
            (word, Entry { class, value, ordinal: ordinals.contains(word) })
        })
        .collect()
}
