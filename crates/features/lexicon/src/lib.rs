//! # Lexicon
//!
//! Word tables mapping number words to values, one disjoint table per
//! [`Language`]. A [`Lexicon`] is built once per language and injected into
//! the compiler through the [`NumberLookup`] trait; tables are never merged,
//! so a literal such as `elf` means 11 in Dutch and German without clashing
//! with anything in the English table.
//!
//! ```rust
//! use wordnum_lexicon::{Language, Lexicon, NumberLookup, TokenClass};
//!
//! let lexicon = Lexicon::shared(Language::Portuguese);
//! assert_eq!(lexicon.value_of("duzentos"), Some(200.0));
//! assert_eq!(lexicon.classify("duzentos"), Some(TokenClass::Hundred));
//! assert_eq!(lexicon.classify("vírgula"), Some(TokenClass::DecimalSeparator));
//! assert!(lexicon.is_joiner("e"));
//! ```

mod error;
mod lexicon;
mod tables;

pub use crate::error::{LexiconError, LexiconErrorExt};
pub use crate::lexicon::{Entry, Lexicon, NumberLookup};
pub use wordnum_domain::{Language, Token, TokenClass};
