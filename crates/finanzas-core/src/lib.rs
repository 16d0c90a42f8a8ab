//! # finanzas-core
//!
//! Core library for the finanzas personal-finance tools: compound interest
//! accrual, input coercion, currency formatting, and the request/response
//! models for savings goals and 50/30/20 budget analysis.

pub mod budget;
pub mod constants;
pub mod error;
pub mod format;
pub mod goal;
pub mod history;
pub mod input;
pub mod interest;
pub mod stats;

// Re-exports
pub use budget::{BudgetAnalysis, BudgetRequest, Category, Expense};
pub use constants::{exit_codes, HISTORY_LIMIT, MAX_MONTHS};
pub use error::{FinError, Severity};
pub use goal::{GoalProjection, GoalRequest};
pub use history::{AnalysisHistoryEntry, GoalHistoryEntry, InterestSnapshot};
pub use input::ParseMode;
pub use interest::{
    compute_compound_interest, compute_with_policy, InterestInput, InterestResult, MonthPolicy,
};
pub use stats::{compute_stats, HistoryStats};
