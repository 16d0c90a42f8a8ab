//! Backend trait consumed by the application.

use finanzas_core::budget::{BudgetAnalysis, BudgetRequest};
use finanzas_core::goal::{GoalProjection, GoalRequest};

/// Error talking to the finance service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never got an answer.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The answer was not the expected JSON.
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Remote computation of goal projections and budget analyses.
pub trait FinanceBackend {
    /// Project how to reach a savings goal.
    fn project_goal(&self, request: &GoalRequest) -> Result<GoalProjection, ApiError>;

    /// Classify and diagnose a monthly budget.
    fn analyze_budget(&self, request: &BudgetRequest) -> Result<BudgetAnalysis, ApiError>;
}
