//! # finanzas-store
//!
//! Local persistence: one JSON file per key under a store directory, plus
//! bounded histories of goal projections and budget analyses.

pub mod io;
pub mod records;

pub use io::LocalStore;
pub use records::{
    analysis_history, goal_history, last_interest, record_analysis, record_goal,
    save_last_interest,
};

/// Key of the last interest calculation.
pub const KEY_LAST_INTEREST: &str = "last_interest_calculation";
/// Key of the goal projection history.
pub const KEY_GOAL_HISTORY: &str = "goal_history";
/// Key of the budget analysis history.
pub const KEY_ANALYSIS_HISTORY: &str = "analysis_history";
