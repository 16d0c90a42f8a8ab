//! # finanzas-cli
//!
//! Terminal output for finanzas: result presenters, notifications, the
//! waiting spinner, and shell completion.

pub mod completion;
pub mod notify;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use notify::{NotificationKind, Notifier};
pub use presenter::{CliPresenter, JsonPresenter, ResultPresenter};
