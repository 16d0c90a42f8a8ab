//! Error handling and exit codes.

use finanzas_api::ApiError;
use finanzas_cli::{NotificationKind, Notifier};
use finanzas_core::constants::exit_codes;
use finanzas_core::error::FinError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// `--last` was given but nothing has been saved yet.
    #[error("no saved calculation found")]
    NothingSaved,

    /// The finance service answered with an error message.
    #[error("the finance service rejected the request: {0}")]
    Rejected(String),
}

/// Map an error to its process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<FinError>() {
        return match e {
            FinError::InvalidDuration(_)
            | FinError::FractionalMonths(_)
            | FinError::DurationTooLong(_)
            | FinError::InvalidInput(_)
            | FinError::Validation { .. } => exit_codes::ERROR_INPUT,
        };
    }
    if err.downcast_ref::<ApiError>().is_some() {
        return exit_codes::ERROR_REMOTE;
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(AppError::NothingSaved) => exit_codes::ERROR_INPUT,
        Some(AppError::Rejected(_)) => exit_codes::ERROR_REMOTE,
        None => exit_codes::ERROR_GENERIC,
    }
}

/// Kind and text of the notification shown for `err`.
pub fn describe(err: &anyhow::Error) -> (NotificationKind, String) {
    match err.downcast_ref::<FinError>() {
        Some(FinError::InvalidDuration(_)) => (
            NotificationKind::Warning,
            "Enter a valid number of years".to_string(),
        ),
        Some(e @ FinError::Validation { .. }) => (e.severity().into(), e.to_string()),
        Some(e) => (e.severity().into(), format!("{err:#}")),
        None => (NotificationKind::Error, format!("{err:#}")),
    }
}

/// Notify the user about `err` and return the exit code to use.
pub fn report(err: &anyhow::Error, quiet: bool) -> i32 {
    let (kind, message) = describe(err);
    Notifier::new(quiet).notify(&message, kind);
    tracing::debug!(error = ?err, "command failed");
    handle_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use finanzas_core::error::Severity;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FinError::InvalidDuration(0.0).into()), 2);
        assert_eq!(
            handle_error(&FinError::InvalidInput("x".into()).into()),
            2
        );
        assert_eq!(handle_error(&AppError::Config("bad".into()).into()), 4);
        assert_eq!(handle_error(&AppError::Rejected("no".into()).into()), 3);
        assert_eq!(handle_error(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn api_errors_survive_context() {
        let err: anyhow::Error = ApiError::Status {
            url: "http://localhost/api/analizar".into(),
            status: 500,
        }
        .into();
        let err = err.context("Error analyzing the budget");
        assert_eq!(handle_error(&err), exit_codes::ERROR_REMOTE);
        let (kind, message) = describe(&err);
        assert_eq!(kind, NotificationKind::Error);
        assert!(message.starts_with("Error analyzing the budget"));
    }

    #[test]
    fn invalid_duration_is_a_warning() {
        let (kind, message) = describe(&FinError::InvalidDuration(-1.0).into());
        assert_eq!(kind, NotificationKind::Warning);
        assert_eq!(message, "Enter a valid number of years");
    }

    #[test]
    fn validation_keeps_its_severity() {
        let err: anyhow::Error =
            FinError::validation(Severity::Warning, "Add at least one expense to analyze").into();
        let (kind, message) = describe(&err);
        assert_eq!(kind, NotificationKind::Warning);
        assert_eq!(message, "Add at least one expense to analyze");
    }

    #[test]
    fn context_on_results() {
        let res: Result<(), FinError> = Err(FinError::DurationTooLong(500.0));
        let err = res.context("interest").unwrap_err();
        assert_eq!(handle_error(&err), exit_codes::ERROR_INPUT);
    }
}
