//! # Domain Models
//!
//! Pure data types shared by every `wordnum` crate, with minimal dependencies
//! (`serde`, `strum`). Keep it lean: no lookups, arithmetic, or I/O. Tokens,
//! subregions and regions are produced by an upstream tokenizer/segmenter and
//! are only read by the compiler.

pub mod config;
pub mod model;
pub mod options;

pub use model::{Region, SubRegion, Token, TokenClass};
pub use options::{Language, Options};
