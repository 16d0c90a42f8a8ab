//! # finanzas-api
//!
//! Access to the remote finance service that projects savings goals and
//! analyzes budgets. The service is consumed as a black box over HTTP.

pub mod backend;
pub mod http;

pub use backend::{ApiError, FinanceBackend};
pub use http::HttpBackend;

/// Default base URL of the finance service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Path of the goal projection endpoint.
pub const GOAL_PROJECTION_PATH: &str = "/api/proyectar-meta";

/// Path of the budget analysis endpoint.
pub const BUDGET_ANALYSIS_PATH: &str = "/api/analizar";
