//! Numeral text conversions.
//!
//! Region values travel through their decimal text form: fractional digits
//! are concatenated as strings and glued numbers are re-read from text. These
//! helpers fix both directions so the results stay stable across platforms.

use crate::error::{CompileError, Result};

/// Magnitude from which numerals switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which numerals switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest decimal text that reads back as `value`.
///
/// Integral values carry no fractional part (`23`, not `23.0`). Magnitudes of
/// at least `1e21` or below `1e-6` use exponent notation with an explicit
/// sign (`2e+33`, `1.5e-7`).
#[must_use]
pub fn format_numeral(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => scientific,
    }
}

/// Reads the longest numeric prefix of `raw`, ignoring whatever follows.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. `"1.52.5"` reads as `1.52` and `"12abc"` as `12`.
///
/// # Errors
/// Returns [`CompileError::InvalidNumeral`] when `raw` has no numeric prefix.
pub fn parse_numeral(raw: &str) -> Result<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let invalid = || CompileError::InvalidNumeral { numeral: raw.to_owned(), context: None };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Ok(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let whole = leading_digits(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = leading_digits(&bytes[end + 1..]);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return Err(invalid());
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = leading_digits(&bytes[exponent..]);
        if digits > 0 {
            end = exponent + digits;
        }
    }

    text[..end].parse::<f64>().map_err(|_| invalid())
}

/// English ordinal suffix for a non-negative integral value.
///
/// Values ending in 11, 12 or 13 take `th`; otherwise the last digit decides.
#[must_use]
pub fn ordinal_suffix(value: f64) -> Option<&'static str> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    if (11.0..=13.0).contains(&(value % 100.0)) {
        return Some("th");
    }

    let suffix = match value % 10.0 {
        1.0 => "st",
        2.0 => "nd",
        3.0 => "rd",
        _ => "th",
    };
    Some(suffix)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
