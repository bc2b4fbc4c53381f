#![allow(dead_code)]

use wordnum_domain::{Language, Region, SubRegion, Token};
use wordnum_lexicon::Lexicon;

/// Classifies `word` with the shared table of `language`.
///
/// # Panics
/// * If the word is not a number word in that language.
#[must_use]
pub fn token(language: Language, word: &str) -> Token {
    Lexicon::shared(language)
        .token(word)
        .unwrap_or_else(|| panic!("'{word}' is not a {language} number word"))
}

/// One single-token subregion per whitespace-separated word.
#[must_use]
pub fn singles(language: Language, words: &str) -> Vec<SubRegion> {
    words.split_whitespace().map(|word| SubRegion::single(token(language, word))).collect()
}

/// A magnitude run made of every word in `words`.
#[must_use]
pub fn run(language: Language, words: &str) -> SubRegion {
    SubRegion::new(
        wordnum_domain::TokenClass::Magnitude,
        words.split_whitespace().map(|word| token(language, word)).collect(),
    )
}

/// Region covering the first occurrence of `phrase` in `text`, in char offsets.
///
/// # Panics
/// * If `phrase` does not occur in `text`.
#[must_use]
pub fn locate(text: &str, phrase: &str, sub_regions: Vec<SubRegion>) -> Region {
    let byte = text.find(phrase).unwrap_or_else(|| panic!("'{phrase}' not found in '{text}'"));
    let start = text[..byte].chars().count();
    Region::new(start, start + phrase.chars().count() - 1, sub_regions)
}
