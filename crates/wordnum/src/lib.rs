//! Facade crate for spoken-number conversion.
//! Re-exports the domain model and compiler, and wires settings and logging
//! around a [`Converter`]. Keep this crate thin: it composes the other crates
//! and holds no conversion logic of its own.
//!
//! ## Usage
//! - Load [`Settings`] with [`config::load_settings`] (file plus `WORDNUM__` env overrides).
//! - Call [`init_logging`] once per process if you want log output.
//! - Build a [`Converter`] and feed it the regions found by your tokenizer.
//!
//! ```rust
//! use wordnum::{Conversion, Converter, Language, Region, SubRegion, Token, TokenClass};
//!
//! let converter = Converter::builder().language(Language::Dutch).build();
//! let text = "ik heb drie katten";
//! let region = Region::new(7, 10, vec![SubRegion::single(Token::new(TokenClass::Unit, "drie"))]);
//!
//! assert_eq!(converter.convert(&[region], text)?, Conversion::Text("ik heb 3 katten".into()));
//! # Ok::<(), wordnum::Error>(())
//! ```

pub mod config;
mod converter;
mod error;
mod logging;

pub use crate::converter::{Converter, ConverterBuilder};
pub use crate::error::{Error, ErrorExt, Result};
pub use crate::logging::{LOGGER_NAME, init_logging};

pub use wordnum_compiler as compiler;
pub use wordnum_domain as domain;
pub use wordnum_lexicon as lexicon;

pub use wordnum_compiler::{CompileError, Compiler, Conversion};
pub use wordnum_domain::config::{LoggingConfig, Settings};
pub use wordnum_domain::{Language, Options, Region, SubRegion, Token, TokenClass};
pub use wordnum_lexicon::{Lexicon, NumberLookup};
pub use wordnum_logger::{Logger, LoggerError};
