//! # Semantic Compiler
//!
//! Final stage of spoken-number conversion. The tokenizer and parser upstream
//! find number phrases in a text, split each phrase into subregions of one
//! grammatical class, and hand the resulting [`Region`]s to a [`Compiler`]:
//!
//! - [`Compiler::resolve`] computes the value of one subregion.
//! - [`Compiler::compile`] folds the subregions of one region into a number.
//! - [`Compiler::assemble`] shapes the per-region numbers into a [`Conversion`].
//!
//! Word values come from a [`NumberLookup`], normally the built-in
//! [`Lexicon`](wordnum_lexicon::Lexicon) of one language.
//!
//! ```rust
//! use wordnum_compiler::{Compiler, Conversion};
//! use wordnum_domain::{Language, Options, Region, SubRegion, Token, TokenClass};
//!
//! let compiler = Compiler::for_language(Language::English);
//! let text = "I have twenty three apples";
//! let region = Region::new(7, 18, vec![
//!     SubRegion::single(Token::new(TokenClass::Ten, "twenty")),
//!     SubRegion::single(Token::new(TokenClass::Unit, "three")),
//! ]);
//!
//! let result = compiler.assemble(&[region], text, &Options::default())?;
//! assert_eq!(result, Conversion::Text("I have 23 apples".to_owned()));
//! # Ok::<(), wordnum_compiler::CompileError>(())
//! ```

mod assembler;
mod engine;
mod error;
mod numeral;
mod region;
mod resolver;

pub use crate::assembler::Conversion;
pub use crate::engine::Compiler;
pub use crate::error::{CompileError, CompileErrorExt, Result};
pub use crate::numeral::{format_numeral, ordinal_suffix, parse_numeral};
pub use crate::resolver::CompiledValue;
pub use wordnum_lexicon::NumberLookup;
