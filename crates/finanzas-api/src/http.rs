//! Blocking HTTP implementation of [`FinanceBackend`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use finanzas_core::budget::{BudgetAnalysis, BudgetRequest};
use finanzas_core::goal::{GoalProjection, GoalRequest};

use crate::backend::{ApiError, FinanceBackend};
use crate::{BUDGET_ANALYSIS_PATH, GOAL_PROJECTION_PATH};

/// Finance service reached over HTTP with JSON bodies.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a backend for the service at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                url: base_url.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "posting to finance service");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "finance service error");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

impl FinanceBackend for HttpBackend {
    fn project_goal(&self, request: &GoalRequest) -> Result<GoalProjection, ApiError> {
        self.post_json(GOAL_PROJECTION_PATH, request)
    }

    fn analyze_budget(&self, request: &BudgetRequest) -> Result<BudgetAnalysis, ApiError> {
        self.post_json(BUDGET_ANALYSIS_PATH, request)
    }
}
