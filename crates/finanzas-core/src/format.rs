//! Currency and percentage formatting.

/// Currency symbol used for display (Mexican peso).
pub const CURRENCY_SYMBOL: &str = "$";

/// Format an amount as whole pesos with thousands separators: `-$2,017`.
///
/// The sign follows the unrounded amount, so `-0.2` renders as `-$0`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    let rounded = value.round();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{}", group_integer(rounded.abs()))
}

/// Format a percentage value (`12.5` means 12.5 %) with one decimal.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return format!("{s}%");
    }
    format!("{}%", format_decimal(value, 1))
}

/// Format a ratio (`0.125` means 12.5 %) as a percentage, or `n/a`.
#[must_use]
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format_percent(r * 100.0),
        None => "n/a".to_string(),
    }
}

/// Format a signed percentage, prefixing `+` for non-negative values.
#[must_use]
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_percent(value))
    } else {
        format_percent(value)
    }
}

/// Format `value` with `decimals` places and grouped integer digits.
#[must_use]
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = group_digits(int_part);
    // no sign on values that round to zero
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" })
    } else {
        None
    }
}

fn group_integer(value: f64) -> String {
    group_digits(&format!("{value:.0}"))
}

/// Insert a comma every three digits from the right.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
