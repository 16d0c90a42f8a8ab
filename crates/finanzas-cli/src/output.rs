//! Text output helpers.

use std::io::{self, Write};

use serde::Serialize;

/// Width of percentage bars, in cells.
pub const BAR_WIDTH: usize = 20;

/// Render a horizontal bar filled to `percent` (clamped to 0..=100).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar(percent: f64, width: usize) -> String {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Write `value` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if serialization or the write fails.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{s}")
}

/// Left-aligned label followed by a value.
#[must_use]
pub fn row(label: &str, value: &str) -> String {
    format!("  {label:<28} {value}")
}
