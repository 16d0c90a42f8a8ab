//! Savings goal requests and projections.
//!
//! The projection itself is computed by the remote finance API; this module
//! owns the request validation, the wire shapes, and the derived figures the
//! presenter shows next to a projection.

use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_MONTHLY_SAVING, MONTHS_PER_YEAR};
use crate::error::{FinError, Severity};

/// Request body for `/api/proyectar-meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRequest {
    #[serde(rename = "monto_objetivo")]
    pub target_amount: f64,
    #[serde(rename = "ahorro_actual")]
    pub current_savings: f64,
    #[serde(rename = "ahorro_mensual")]
    pub monthly_savings: f64,
    /// Desired term in months; serialized as `null` when absent.
    #[serde(rename = "plazo_deseado")]
    pub desired_months: Option<u32>,
}

impl GoalRequest {
    /// Check the request before it is sent.
    pub fn validate(&self) -> Result<(), FinError> {
        if self.target_amount <= 0.0 || self.target_amount.is_nan() {
            return Err(FinError::validation(
                Severity::Error,
                "Please enter a valid target amount",
            ));
        }
        if self.monthly_savings <= 0.0 && !self.has_term() {
            return Err(FinError::validation(
                Severity::Warning,
                "Enter a monthly saving or a desired term",
            ));
        }
        Ok(())
    }

    /// Whether a positive desired term was given.
    #[must_use]
    pub fn has_term(&self) -> bool {
        self.desired_months.is_some_and(|m| m > 0)
    }
}

/// Projection returned by the finance API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GoalProjectionWire", into = "GoalProjectionWire")]
pub enum GoalProjection {
    /// Monthly saving needed to reach the goal within the desired term.
    ByTerm {
        months: f64,
        required_monthly: f64,
        remaining: f64,
        estimated_date: String,
    },
    /// Time needed to reach the goal at the current monthly saving.
    BySavings {
        months: f64,
        years: f64,
        monthly: f64,
        remaining: f64,
        estimated_date: String,
    },
    /// Current savings already cover the goal.
    Reached { surplus: f64 },
    /// The server refused the request.
    Rejected { message: String },
}

impl GoalProjection {
    /// For a by-term projection with a positive required saving, whether that
    /// saving exceeds [`HIGH_MONTHLY_SAVING`].
    #[must_use]
    pub fn is_demanding(&self) -> Option<bool> {
        match self {
            Self::ByTerm {
                required_monthly, ..
            } if *required_monthly > 0.0 => Some(*required_monthly > HIGH_MONTHLY_SAVING),
            _ => None,
        }
    }
}

/// Share of the monthly goal instalment (`target / 12`) covered by `monthly`,
/// capped at 100.
#[must_use]
pub fn monthly_progress_percent(monthly: f64, target: f64) -> f64 {
    (monthly / (target / MONTHS_PER_YEAR) * 100.0).min(100.0)
}

/// Yearly saving as a percentage of the target.
#[must_use]
pub fn annual_share_percent(monthly: f64, target: f64) -> f64 {
    monthly * MONTHS_PER_YEAR / target * 100.0
}

/// Flat wire shape of a projection; which fields are present decides the variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalProjectionWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_alcanzada: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excedente: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_calculo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meses_plazo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ahorro_mensual_necesario: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meses_para_meta: Option<f64>,
    #[serde(
        default,
        rename = "años_para_meta",
        alias = "anos_para_meta",
        skip_serializing_if = "Option::is_none"
    )]
    pub anos_para_meta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ahorro_mensual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub falta_por_ahorrar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_estimada: Option<String>,
}

impl TryFrom<GoalProjectionWire> for GoalProjection {
    type Error = String;

    fn try_from(w: GoalProjectionWire) -> Result<Self, Self::Error> {
        if let Some(message) = w.error {
            return Ok(Self::Rejected { message });
        }
        if w.meta_alcanzada == Some(true) {
            return Ok(Self::Reached {
                surplus: w.excedente.unwrap_or(0.0),
            });
        }
        let estimated_date = w.fecha_estimada.unwrap_or_default();
        let remaining = w.falta_por_ahorrar.unwrap_or(0.0);
        match w.tipo_calculo.as_deref() {
            Some("por_plazo") => Ok(Self::ByTerm {
                months: w.meses_plazo.ok_or("missing meses_plazo")?,
                required_monthly: w
                    .ahorro_mensual_necesario
                    .ok_or("missing ahorro_mensual_necesario")?,
                remaining,
                estimated_date,
            }),
            Some("por_ahorro") => {
                let months = w.meses_para_meta.ok_or("missing meses_para_meta")?;
                Ok(Self::BySavings {
                    months,
                    years: w.anos_para_meta.unwrap_or(months / MONTHS_PER_YEAR),
                    monthly: w.ahorro_mensual.unwrap_or(0.0),
                    remaining,
                    estimated_date,
                })
            }
            Some(other) => Err(format!("unknown tipo_calculo '{other}'")),
            None => Err("projection has neither error nor tipo_calculo".to_string()),
        }
    }
}

impl From<GoalProjection> for GoalProjectionWire {
    fn from(p: GoalProjection) -> Self {
        match p {
            GoalProjection::Rejected { message } => Self {
                error: Some(message),
                ..Self::default()
            },
            GoalProjection::Reached { surplus } => Self {
                meta_alcanzada: Some(true),
                excedente: Some(surplus),
                ..Self::default()
            },
            GoalProjection::ByTerm {
                months,
                required_monthly,
                remaining,
                estimated_date,
            } => Self {
                tipo_calculo: Some("por_plazo".into()),
                meses_plazo: Some(months),
                ahorro_mensual_necesario: Some(required_monthly),
                falta_por_ahorrar: Some(remaining),
                fecha_estimada: Some(estimated_date),
                ..Self::default()
            },
            GoalProjection::BySavings {
                months,
                years,
                monthly,
                remaining,
                estimated_date,
            } => Self {
                tipo_calculo: Some("por_ahorro".into()),
                meses_para_meta: Some(months),
                anos_para_meta: Some(years),
                ahorro_mensual: Some(monthly),
                falta_por_ahorrar: Some(remaining),
                fecha_estimada: Some(estimated_date),
                ..Self::default()
            },
        }
    }
}
