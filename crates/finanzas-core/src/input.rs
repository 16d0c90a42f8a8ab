//! Numeric input parsing.
//!
//! Form values are coerced leniently by default: whatever numeric prefix the
//! text starts with is used, and anything unparseable becomes zero. Strict
//! parsing rejects those inputs instead.

use crate::error::FinError;

/// Parsing policy for user-supplied numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Coerce missing or non-numeric input to zero.
    #[default]
    Lenient,
    /// Reject anything that is not a finite number.
    Strict,
}

impl ParseMode {
    #[must_use]
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    /// Parse `raw` under this policy. `field` names the value in errors.
    pub fn parse(self, field: &str, raw: &str) -> Result<f64, FinError> {
        match self {
            Self::Lenient => Ok(parse_lenient(raw)),
            Self::Strict => parse_strict(raw)
                .map_err(|_| FinError::InvalidInput(format!("{field}: '{raw}' is not a number"))),
        }
    }

    /// Parse an optional value; absent input is zero in both modes.
    pub fn parse_opt(self, field: &str, raw: Option<&str>) -> Result<f64, FinError> {
        raw.map_or(Ok(0.0), |r| self.parse(field, r))
    }
}

/// Parse the longest numeric prefix of `raw`, or zero if there is none.
///
/// `"12abc"` is 12, `"1e3"` is 1000, `"abc"` and `""` are 0.
#[must_use]
pub fn parse_lenient(raw: &str) -> f64 {
    let value = numeric_prefix(raw.trim_start()).map_or(f64::NAN, |prefix| {
        prefix.parse::<f64>().unwrap_or(f64::NAN)
    });
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Parse `raw` as a finite number, surrounding whitespace allowed.
pub fn parse_strict(raw: &str) -> Result<f64, FinError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FinError::InvalidInput(format!("'{raw}' is not a number"))),
    }
}

/// Longest prefix of `s` that reads as a decimal number.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(&s[..end + "Infinity".len()]);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&s[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
