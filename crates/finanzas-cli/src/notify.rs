//! One-line user notifications on stderr.

use console::style;

use finanzas_core::budget::DiagnosticKind;
use finanzas_core::error::Severity;

use crate::ui::is_color_disabled;

/// Kind of notification, deciding its tag and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Success => "[OK]",
            Self::Warning => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    fn styled_tag(self) -> String {
        let tag = style(self.tag()).bold();
        match self {
            Self::Info => tag.cyan(),
            Self::Success => tag.green(),
            Self::Warning => tag.yellow(),
            Self::Error => tag.red(),
        }
        .to_string()
    }
}

impl From<Severity> for NotificationKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}

impl From<DiagnosticKind> for NotificationKind {
    fn from(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::Success => Self::Success,
            DiagnosticKind::Warning => Self::Warning,
            DiagnosticKind::Danger => Self::Error,
        }
    }
}

/// Writes notifications to stderr. Quiet mode keeps only errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Notifier {
    quiet: bool,
}

impl Notifier {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Render a notification line without printing it.
    #[must_use]
    pub fn render(&self, message: &str, kind: NotificationKind) -> String {
        if is_color_disabled() {
            format!("{} {message}", kind.tag())
        } else {
            format!("{} {message}", kind.styled_tag())
        }
    }

    /// Whether a notification of `kind` would be shown.
    #[must_use]
    pub fn shows(&self, kind: NotificationKind) -> bool {
        !self.quiet || kind == NotificationKind::Error
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        tracing::debug!(?kind, "{message}");
        if self.shows(kind) {
            eprintln!("{}", self.render(message, kind));
        }
    }

    pub fn info(&self, message: &str) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn success(&self, message: &str) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn warning(&self, message: &str) {
        self.notify(message, NotificationKind::Warning);
    }

    pub fn error(&self, message: &str) {
        self.notify(message, NotificationKind::Error);
    }
}
