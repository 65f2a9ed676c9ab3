//! Numeric argument parsing.
//!
//! Lenient parsing reads the longest numeric prefix of a token, the way a
//! JavaScript `parseFloat` does: `"12abc"` is `12`, `"abc"` is `NaN`. Strict
//! parsing accepts a token only when the whole of it is a number.

use crate::calcshell::error::CalcError;
use serde::{Deserialize, Serialize};

/// How command arguments are turned into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberParsing {
    /// Longest numeric prefix; no prefix gives `NaN`.
    Lenient,
    /// The whole token must be numeric, otherwise `ParseError`.
    Strict,
}

impl Default for NumberParsing {
    fn default() -> Self {
        NumberParsing::Lenient
    }
}

impl NumberParsing {
    pub fn float(&self, token: &str) -> Result<f64, CalcError> {
        match self {
            NumberParsing::Lenient => Ok(parse_float(token)),
            NumberParsing::Strict => {
                let trimmed = token.trim();
                match float_prefix(trimmed) {
                    Some(prefix) if prefix.len() == trimmed.len() => Ok(prefix_value(prefix)),
                    _ => Err(CalcError::ParseError(token.to_string())),
                }
            }
        }
    }

    /// Integer argument. A token with no integer prefix is reported through
    /// `on_missing`, so callers choose the error variant.
    pub fn integer(
        &self,
        token: &str,
        on_missing: impl FnOnce(&str) -> CalcError,
    ) -> Result<i64, CalcError> {
        match self {
            NumberParsing::Lenient => parse_int(token).ok_or_else(|| on_missing(token)),
            NumberParsing::Strict => token
                .trim()
                .parse::<i64>()
                .map_err(|_| CalcError::ParseError(token.to_string())),
        }
    }
}

/// Longest numeric prefix of `token` as a float, or `NaN`.
pub fn parse_float(token: &str) -> f64 {
    match float_prefix(token.trim_start()) {
        Some(prefix) => prefix_value(prefix),
        None => f64::NAN,
    }
}

/// Longest integer prefix of `token` (optional sign then digits).
pub fn parse_int(token: &str) -> Option<i64> {
    let s = token.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<i64>().ok()
}

fn prefix_value(prefix: &str) -> f64 {
    if prefix.ends_with("Infinity") {
        if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        prefix.parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// `[+-]` then `Infinity`, or digits with an optional fraction and exponent.
fn float_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(&s[..i + "Infinity".len()]);
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut k = i + 1;
        if k < len && (bytes[k] == b'+' || bytes[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < len && bytes[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            i = k;
        }
    }

    Some(&s[..i])
}
