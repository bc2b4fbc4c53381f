//! Value of a whole number phrase.

use crate::engine::Compiler;
use crate::error::{CompileError, Result};
use crate::numeral::{format_numeral, parse_numeral};
use tracing::debug;
use wordnum_domain::Region;
use wordnum_lexicon::NumberLookup;

/// Running state while folding the subregions of one region.
#[derive(Debug, Default)]
struct Accumulator {
    whole: f64,
    /// Fractional digits, concatenated as text in subregion order.
    fraction: String,
    decimal: bool,
}

impl<L: NumberLookup> Compiler<L> {
    /// Computes the value of one number phrase.
    ///
    /// Subregions before the decimal separator add up to the whole part. After
    /// it, each subregion appends its numeral to the fractional digits, so
    /// "one point twelve" reads `1.12` and "one point two three" reads `1.23`.
    /// An empty region is `0`.
    ///
    /// # Errors
    /// Propagates the first subregion failure from [`Compiler::resolve`].
    pub fn compile(&self, region: &Region) -> Result<f64> {
        let acc = region.sub_regions.iter().try_fold(Accumulator::default(), |mut acc, sub| {
            let value = self.resolve(sub, acc.decimal)?;
            acc.decimal = value.decimal;
            if !acc.decimal {
                acc.whole += value.sum;
            } else if !sub.is_decimal_separator() {
                acc.fraction.push_str(&format_numeral(value.sum));
            }
            Ok::<_, CompileError>(acc)
        })?;

        let value = parse_numeral(&format!("{}.{}", format_numeral(acc.whole), acc.fraction))?;
        debug!(start = region.start, end = region.end, value, "Region compiled");
        Ok(value)
    }
}
