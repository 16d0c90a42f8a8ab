//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Highlight a headline figure.
#[must_use]
pub fn emphasize(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// Color a figure green when non-negative and red otherwise.
#[must_use]
pub fn signed(text: &str, value: f64) -> String {
    if is_color_disabled() {
        text.to_string()
    } else if value >= 0.0 {
        style(text).green().to_string()
    } else {
        style(text).red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Compound interest").contains("Compound interest"));
    }

    #[test]
    fn emphasize_keeps_text() {
        assert!(emphasize("$1,000").contains("$1,000"));
    }

    #[test]
    fn signed_keeps_text() {
        assert!(signed("+2.0%", 2.0).contains("+2.0%"));
        assert!(signed("-2.0%", -2.0).contains("-2.0%"));
    }

    #[test]
    fn header_with_unicode() {
        assert!(header("Año \u{2192} meta").contains("Año"));
    }
}
