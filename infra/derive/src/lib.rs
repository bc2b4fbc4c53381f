#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `wordnum` crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! wordnum-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The examples below are `ignore`d to avoid compiling in this crate; the
//! consuming crates (`wordnum-compiler`, `wordnum-lexicon`, `wordnum-logger`)
//! exercise the generated code in their own tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type with context support.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `Result<T>` alias defaulting to the annotated error.
/// * An `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>`, and to
///   `Result<T, Source>` for every variant that wraps a source error.
/// * `From<Source>` for variants with a `source` field (or a field marked `#[source]` /
///   `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper usable from `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. A variant with a source error must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[wordnum_derive::wordnum_error]
/// pub enum LookupError {
///     #[error("Unknown word '{word}'{}", format_context(.context))]
///     UnknownWord { word: String, context: Option<Cow<'static, str>> },
///
///     #[error("Bad number{}: {source}", format_context(.context))]
///     Parse { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal lookup error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<f64> {
///     raw.parse::<f64>().context("parsing numeral")
/// }
/// ```
#[proc_macro_attribute]
pub fn wordnum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
