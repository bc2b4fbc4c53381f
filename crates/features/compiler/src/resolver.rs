//! Value of a single subregion.

use crate::engine::Compiler;
use crate::error::{CompileError, Result};
use tracing::trace;
use wordnum_domain::{SubRegion, Token, TokenClass};
use wordnum_lexicon::NumberLookup;

/// Numeric contribution of one subregion and the mode that follows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompiledValue {
    pub sum: f64,
    /// `true` once the region has entered its fractional part.
    pub decimal: bool,
}

impl CompiledValue {
    #[must_use]
    pub const fn new(sum: f64, decimal: bool) -> Self {
        Self { sum, decimal }
    }
}

impl<L: NumberLookup> Compiler<L> {
    /// Computes the value of `sub_region`.
    ///
    /// `decimal` reports whether a decimal separator appeared earlier in the
    /// region. It changes how hundreds and magnitude runs are read:
    ///
    /// * a hundred word after the separator counts as a single digit
    ///   (`duzentos` gives `2`)
    /// * a magnitude run after the separator only sums its non-scale words
    /// * a magnitude run before the separator folds left to right, with every
    ///   scale word multiplying the running sum (a zero sum counts as `1`, so
    ///   "thousand" alone is `1000`)
    ///
    /// A decimal separator yields `0` and switches the mode on; every other
    /// class hands `decimal` back unchanged.
    ///
    /// # Errors
    /// * [`CompileError::MalformedSubRegion`] for a unit, ten or hundred
    ///   subregion that does not hold exactly one token.
    /// * [`CompileError::UnresolvedLiteral`] when a token is missing from the
    ///   lookup.
    pub fn resolve(&self, sub_region: &SubRegion, decimal: bool) -> Result<CompiledValue> {
        let sum = match sub_region.class {
            TokenClass::DecimalSeparator => return Ok(CompiledValue::new(0.0, true)),
            TokenClass::Unit | TokenClass::Ten => self.value_of(single_token(sub_region)?)?,
            TokenClass::Hundred => {
                let value = self.value_of(single_token(sub_region)?)?;
                if decimal { (value / 100.0).round() } else { value }
            },
            TokenClass::Magnitude if decimal => self.sum_digits(&sub_region.tokens)?,
            TokenClass::Magnitude => self.fold_magnitudes(&sub_region.tokens)?,
        };

        trace!(class = %sub_region.class, tokens = sub_region.len(), sum, decimal, "Subregion resolved");
        Ok(CompiledValue::new(sum, decimal))
    }

    fn sum_digits(&self, tokens: &[Token]) -> Result<f64> {
        tokens
            .iter()
            .filter(|token| !matches!(token.class, TokenClass::Magnitude | TokenClass::DecimalSeparator))
            .try_fold(0.0, |sum, token| Ok(sum + self.value_of(token)?))
    }

    fn fold_magnitudes(&self, tokens: &[Token]) -> Result<f64> {
        tokens.iter().try_fold(0.0, |sum, token| match token.class {
            TokenClass::Magnitude => {
                let base = if sum == 0.0 { 1.0 } else { sum };
                Ok(base * self.value_of(token)?)
            },
            TokenClass::DecimalSeparator => Ok(sum),
            _ => Ok(sum + self.value_of(token)?),
        })
    }
}

fn single_token(sub_region: &SubRegion) -> Result<&Token> {
    match sub_region.tokens.as_slice() {
        [token] => Ok(token),
        tokens => Err(CompileError::MalformedSubRegion {
            class: sub_region.class,
            found: tokens.len(),
            context: None,
        }),
    }
}
