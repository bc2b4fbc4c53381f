//! # Result Assembly
//!
//! Turns the compiled regions of one text into the caller's requested shape.
//! Output options are checked in a fixed order: no regions returns the text
//! untouched, then `numbers_only`, then `one_number`, then a single region
//! covering the whole text, and finally in-place replacement.

use crate::engine::Compiler;
use crate::error::{CompileError, CompileErrorExt, Result};
use crate::numeral::{format_numeral, ordinal_suffix, parse_numeral};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};
use wordnum_domain::{Language, Options, Region};
use wordnum_lexicon::NumberLookup;

/// Outcome of converting one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Conversion {
    /// A single value: the glued numerals, or the one region spanning the text.
    Number(f64),
    /// One value per region, in region order.
    Numbers(Vec<f64>),
    /// The input text with every region replaced by its numeral.
    Text(String),
}

impl Conversion {
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Self::Numbers(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_numeral(*value)),
            Self::Numbers(values) => {
                let numerals: Vec<String> = values.iter().map(|v| format_numeral(*v)).collect();
                f.write_str(&numerals.join(", "))
            },
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl<L: NumberLookup> Compiler<L> {
    /// Assembles the final result for `text` from its number `regions`.
    ///
    /// Regions must be sorted by `start`, must not overlap, and carry inclusive
    /// `char` offsets into `text`.
    ///
    /// # Errors
    /// * Any error raised while compiling a region, with the region index
    ///   attached as context.
    /// * [`CompileError::InvalidSpan`] when a region lies outside `text` or
    ///   overlaps the previous one.
    /// * [`CompileError::InvalidNumeral`] when glued numerals cannot be read back.
    #[instrument(
        level = "debug",
        skip_all,
        fields(regions = regions.len(), language = %self.language())
    )]
    pub fn assemble(&self, regions: &[Region], text: &str, options: &Options) -> Result<Conversion> {
        if regions.is_empty() {
            return Ok(Conversion::Text(text.to_owned()));
        }

        if options.numbers_only {
            return self.compile_each(regions).map(Conversion::Numbers);
        }

        if options.one_number {
            let glued = self.compile_each(regions)?.into_iter().map(format_numeral).collect::<String>();
            debug!(%glued, "Gluing numerals into one number");
            return parse_numeral(&glued).map(Conversion::Number);
        }

        let len = text.chars().count();
        if let [region] = regions
            && region.start == 0
            && len.checked_sub(1) == Some(region.end)
        {
            return self.compile(region).context("region 0").map(Conversion::Number);
        }

        self.replace_regions(regions, text, options).map(Conversion::Text)
    }

    fn compile_each(&self, regions: &[Region]) -> Result<Vec<f64>> {
        regions
            .iter()
            .enumerate()
            .map(|(index, region)| self.compile(region).context(format!("region {index}")))
            .collect()
    }

    /// Splices each region's numeral into `text`, left to right.
    ///
    /// The offset carries the length change of every earlier replacement so
    /// later spans, given against the original text, land where they should.
    fn replace_regions(&self, regions: &[Region], text: &str, options: &Options) -> Result<String> {
        check_spans(regions, text.chars().count())?;

        let (replaced, shift) = regions.iter().enumerate().try_fold(
            (text.to_owned(), 0_isize),
            |(current, offset), (index, region)| {
                let at = region
                    .start
                    .checked_add_signed(offset)
                    .ok_or_else(|| CompileError::from(format!("region {index} shifted before the text")))?;

                let numeral = self.render(region, options).context(format!("region {index}"))?;
                let spliced = splice(&current, at, region.char_len(), &numeral);
                let grown = numeral.chars().count() as isize - region.char_len() as isize;
                Ok::<_, CompileError>((spliced, offset + grown))
            },
        )?;

        debug!(shift, "Regions replaced");
        Ok(replaced)
    }

    fn render(&self, region: &Region, options: &Options) -> Result<String> {
        let value = self.compile(region)?;
        let numeral = format_numeral(value);

        let suffix = (options.use_suffix && self.language() == Language::English)
            .then(|| region.last_token())
            .flatten()
            .filter(|token| self.is_ordinal(token))
            .and_then(|_| ordinal_suffix(value));

        Ok(match suffix {
            Some(suffix) => numeral + suffix,
            None => numeral,
        })
    }
}

/// Regions must lie inside the text, in order, without overlapping.
fn check_spans(regions: &[Region], len: usize) -> Result<()> {
    let mut next_free = 0;
    for (index, region) in regions.iter().enumerate() {
        let reason = if region.end < region.start || region.end >= len {
            "outside the text"
        } else if region.start < next_free {
            "overlaps the previous region"
        } else {
            next_free = region.end + 1;
            continue;
        };

        return Err(CompileError::InvalidSpan {
            start: region.start,
            end: region.end,
            len,
            context: Some(format!("region {index}: {reason}").into()),
        });
    }
    Ok(())
}

/// Replaces `count` chars of `text` starting at char `at` with `replacement`.
fn splice(text: &str, at: usize, count: usize, replacement: &str) -> String {
    let byte_at = |chars: usize| text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i);
    let (from, to) = (byte_at(at), byte_at(at + count));

    let mut out = String::with_capacity(text.len() - (to - from) + replacement.len());
    out.push_str(&text[..from]);
    out.push_str(replacement);
    out.push_str(&text[to..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_counts_chars() {
        assert_eq!(splice("über zwei Äpfel", 5, 4, "2"), "über 2 Äpfel");
        assert_eq!(splice("abc", 0, 3, "12345"), "12345");
        assert_eq!(splice("abc", 3, 0, "!"), "abc!");
    }

    #[test]
    fn test_check_spans() {
        let region = |start, end| Region::new(start, end, Vec::new());
        assert!(check_spans(&[region(0, 2), region(4, 9)], 10).is_ok());

        let cases = [
            (vec![region(3, 1)], "region 0: outside the text"),
            (vec![region(0, 10)], "region 0: outside the text"),
            (vec![region(0, 4), region(4, 6)], "region 1: overlaps the previous region"),
            (vec![region(5, 6), region(0, 1)], "region 1: overlaps the previous region"),
        ];
        for (regions, expected) in cases {
            let err = check_spans(&regions, 10).unwrap_err();
            assert!(
                matches!(err, CompileError::InvalidSpan { len: 10, context: Some(ref c), .. } if c == expected),
                "{err}"
            );
        }
    }

    #[test]
    fn test_conversion_display() {
        assert_eq!(Conversion::Number(2e33).to_string(), "2e+33");
        assert_eq!(Conversion::Numbers(vec![5.0, 1.5]).to_string(), "5, 1.5");
        assert_eq!(Conversion::Text("5 apples".into()).to_string(), "5 apples");
    }

    #[test]
    fn test_conversion_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Conversion::Number(23.0)).unwrap(), "23.0");
        assert_eq!(serde_json::to_string(&Conversion::Numbers(vec![1.0, 2.5])).unwrap(), "[1.0,2.5]");
        assert_eq!(serde_json::to_string(&Conversion::Text("x".into())).unwrap(), "\"x\"");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Conversion::Number(1.0).as_number(), Some(1.0));
        assert_eq!(Conversion::Number(1.0).as_text(), None);
        assert_eq!(Conversion::Numbers(vec![1.0]).as_numbers(), Some(&[1.0][..]));
        assert_eq!(Conversion::Text("a".into()).as_text(), Some("a"));
    }
}
