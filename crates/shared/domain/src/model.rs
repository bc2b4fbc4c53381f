use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Grammatical class assigned to a word by the upstream tokenizer.
#[derive(
    Debug,
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
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenClass {
    /// Zero to nineteen, including ordinal forms ("one", "third", "twaalf").
    Unit,
    /// Multiples of ten ("twenty", "vijftig").
    Ten,
    /// Dedicated hundred words (100..=900) such as Portuguese "duzentos".
    Hundred,
    /// Scale words that multiply ("hundred", "thousand", "miljoen").
    Magnitude,
    /// Words switching the phrase into its fractional part ("point", "komma").
    DecimalSeparator,
}

/// A single classified word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub class: TokenClass,
    /// Lowercased source text of the word.
    pub literal: String,
}

impl Token {
    /// Creates a token, lowercasing the literal.
    pub fn new(class: TokenClass, literal: impl AsRef<str>) -> Self {
        Self { class, literal: literal.as_ref().to_lowercase() }
    }
}

/// A run of tokens of one grammatical class inside a region.
///
/// `Magnitude` runs may interleave unit, ten and hundred tokens with the scale
/// words ("two hundred thousand"). Every other class is expected to carry one
/// token; the compiler rejects runs that don't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRegion {
    pub class: TokenClass,
    pub tokens: Vec<Token>,
}

impl SubRegion {
    #[must_use]
    pub const fn new(class: TokenClass, tokens: Vec<Token>) -> Self {
        Self { class, tokens }
    }

    /// A subregion made of exactly one token, inheriting its class.
    #[must_use]
    pub fn single(token: Token) -> Self {
        Self { class: token.class, tokens: vec![token] }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub const fn is_decimal_separator(&self) -> bool {
        matches!(self.class, TokenClass::DecimalSeparator)
    }
}

/// One complete number phrase and the characters it occupies in the source text.
///
/// `start` and `end` are inclusive, 0-based `char` offsets into the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub start: usize,
    pub end: usize,
    pub sub_regions: Vec<SubRegion>,
}

impl Region {
    #[must_use]
    pub const fn new(start: usize, end: usize, sub_regions: Vec<SubRegion>) -> Self {
        Self { start, end, sub_regions }
    }

    /// Number of characters covered by the inclusive span, zero when reversed.
    #[must_use]
    pub const fn char_len(&self) -> usize {
        if self.end < self.start { 0 } else { self.end - self.start + 1 }
    }

    /// The last token of the phrase, used to detect ordinal endings.
    #[must_use]
    pub fn last_token(&self) -> Option<&Token> {
        self.sub_regions.iter().rev().find_map(|sub| sub.tokens.last())
    }
}
