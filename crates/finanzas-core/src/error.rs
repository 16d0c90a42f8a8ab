//! Error type for finanzas calculations and client-side validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a validation failure is.
///
/// Warnings mean the request is incomplete, errors mean it is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Error type for finanzas operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinError {
    /// Duration is zero, negative, or not a number.
    #[error("invalid duration: {0} years")]
    InvalidDuration(f64),

    /// Duration does not map to a whole number of months.
    #[error("duration of {0} years is not a whole number of months")]
    FractionalMonths(f64),

    /// Duration exceeds the supported accrual horizon.
    #[error("duration of {0} years exceeds the supported horizon")]
    DurationTooLong(f64),

    /// A value could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A request failed client-side validation.
    #[error("{message}")]
    Validation { severity: Severity, message: String },
}

impl FinError {
    /// Build a validation error.
    pub fn validation(severity: Severity, message: impl Into<String>) -> Self {
        Self::Validation {
            severity,
            message: message.into(),
        }
    }

    /// Severity to report this error with.
    ///
    /// A rejected duration is a warning, as is an incomplete request.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::InvalidDuration(_) => Severity::Warning,
            Self::Validation { severity, .. } => *severity,
            Self::FractionalMonths(_) | Self::DurationTooLong(_) | Self::InvalidInput(_) => {
                Severity::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_a_warning() {
        assert_eq!(FinError::InvalidDuration(0.0).severity(), Severity::Warning);
        assert_eq!(
            FinError::DurationTooLong(500.0).severity(),
            Severity::Error
        );
    }

    #[test]
    fn validation_carries_severity() {
        let err = FinError::validation(Severity::Warning, "add an expense");
        assert_eq!(err.severity(), Severity::Warning);
        assert_eq!(err.to_string(), "add an expense");
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            FinError::InvalidDuration(-1.0).to_string(),
            "invalid duration: -1 years"
        );
        assert_eq!(
            FinError::InvalidInput("abc".into()).to_string(),
            "invalid input: abc"
        );
    }
}
