//! Spinner shown while waiting on the finance service.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Run `f` while a spinner with `message` ticks on stderr.
///
/// Nothing is drawn when `hidden` is set or stderr is not a terminal.
pub fn with_spinner<T>(message: &str, hidden: bool, f: impl FnOnce() -> T) -> T {
    let pb = if hidden {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    pb.set_message(message.to_string());
    let out = f();
    pb.finish_and_clear();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_closure_value() {
        assert_eq!(with_spinner("Calculating...", true, || 42), 42);
    }

    #[test]
    fn visible_spinner_does_not_panic() {
        let v = with_spinner("Analyzing...", false, || "done");
        assert_eq!(v, "done");
    }
}
