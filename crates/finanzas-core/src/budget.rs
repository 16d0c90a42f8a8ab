//! 50/30/20 budget requests and analyses.
//!
//! Income and expenses are classified and diagnosed by the remote finance
//! API. This module builds and validates the request and decodes the answer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FinError, Severity};
use crate::input::ParseMode;

/// Default description for an expense given without one.
pub const DEFAULT_EXPENSE_DESCRIPTION: &str = "Expense";

/// Budget bucket an expense belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "necesidad")]
    Need,
    #[serde(rename = "deseo")]
    Want,
    #[serde(rename = "ahorro")]
    Savings,
}

impl FromStr for Category {
    type Err = FinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "need" | "needs" | "necesidad" => Ok(Self::Need),
            "want" | "wants" | "deseo" => Ok(Self::Want),
            "savings" | "saving" | "ahorro" => Ok(Self::Savings),
            other => Err(FinError::InvalidInput(format!(
                "unknown expense category '{other}' (expected need, want or savings)"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Need => f.write_str("need"),
            Self::Want => f.write_str("want"),
            Self::Savings => f.write_str("savings"),
        }
    }
}

/// A single monthly expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "categoria")]
    pub category: Category,
}

impl Expense {
    /// Parse `description:amount:category`.
    ///
    /// Only the amount is required. A blank description becomes
    /// [`DEFAULT_EXPENSE_DESCRIPTION`]. A missing category means a need; an
    /// unknown one is an error in strict mode and a need otherwise.
    pub fn parse(text: &str, mode: ParseMode) -> Result<Self, FinError> {
        let mut parts = text.splitn(3, ':');
        let first = parts.next().unwrap_or_default();
        let (description, amount_raw, category_raw) = match (parts.next(), parts.next()) {
            (Some(amount), category) => (first, amount, category),
            (None, _) => ("", first, None),
        };

        let description = match description.trim() {
            "" => DEFAULT_EXPENSE_DESCRIPTION.to_string(),
            d => d.to_string(),
        };
        let amount = mode.parse("expense amount", amount_raw)?;
        let category = match category_raw.map(str::trim).filter(|c| !c.is_empty()) {
            None => Category::default(),
            Some(raw) => match (raw.parse::<Category>(), mode) {
                (Ok(c), _) => c,
                (Err(e), ParseMode::Strict) => return Err(e),
                (Err(_), ParseMode::Lenient) => {
                    tracing::debug!(category = raw, "unknown category, defaulting to need");
                    Category::default()
                }
            },
        };

        Ok(Self {
            description,
            amount,
            category,
        })
    }
}

/// Sum of all expense amounts.
#[must_use]
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Request body for `/api/analizar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRequest {
    #[serde(rename = "ingresos")]
    pub income: f64,
    #[serde(rename = "gastos")]
    pub expenses: Vec<Expense>,
}

impl BudgetRequest {
    /// Build a request, keeping only expenses with a positive amount.
    #[must_use]
    pub fn new(income: f64, expenses: Vec<Expense>) -> Self {
        let expenses = expenses.into_iter().filter(|e| e.amount > 0.0).collect();
        Self { income, expenses }
    }

    pub fn validate(&self) -> Result<(), FinError> {
        if self.income <= 0.0 || self.income.is_nan() {
            return Err(FinError::validation(
                Severity::Error,
                "Please enter your monthly income",
            ));
        }
        if self.expenses.is_empty() {
            return Err(FinError::validation(
                Severity::Warning,
                "Add at least one expense to analyze",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        total_expenses(&self.expenses)
    }
}

/// Per-bucket figures; used for both amounts and percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Buckets {
    #[serde(rename = "necesidades", default)]
    pub needs: f64,
    #[serde(rename = "deseos", default)]
    pub wants: f64,
    #[serde(rename = "ahorro", default)]
    pub savings: f64,
}

/// How a diagnostic should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    #[serde(rename = "exito")]
    Success,
    #[serde(rename = "advertencia")]
    Warning,
    #[serde(rename = "peligro")]
    Danger,
}

/// One line of budget feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(rename = "tipo")]
    pub kind: DiagnosticKind,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "consejo")]
    pub advice: String,
}

/// Response of `/api/analizar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    #[serde(rename = "ingresos")]
    pub income: f64,
    #[serde(rename = "totales", default)]
    pub totals: Buckets,
    #[serde(rename = "porcentajes")]
    pub percentages: Buckets,
    #[serde(rename = "diagnosticos", default)]
    pub diagnostics: Vec<Diagnostic>,
    /// Monthly amount left for new savings goals.
    #[serde(rename = "ahorro_disponible", default)]
    pub available_savings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_expense() {
        let e = Expense::parse("Rent:15000:need", ParseMode::Lenient).unwrap();
        assert_eq!(e.description, "Rent");
        assert_eq!(e.amount, 15_000.0);
        assert_eq!(e.category, Category::Need);

        let e = Expense::parse("Dinner out:3000:deseo", ParseMode::Strict).unwrap();
        assert_eq!(e.category, Category::Want);
    }

    #[test]
    fn parse_amount_only() {
        let e = Expense::parse("250", ParseMode::Lenient).unwrap();
        assert_eq!(e.description, DEFAULT_EXPENSE_DESCRIPTION);
        assert_eq!(e.amount, 250.0);
        assert_eq!(e.category, Category::Need);
    }

    #[test]
    fn parse_blank_description_and_category() {
        let e = Expense::parse(" :400: ", ParseMode::Lenient).unwrap();
        assert_eq!(e.description, DEFAULT_EXPENSE_DESCRIPTION);
        assert_eq!(e.category, Category::Need);
    }

    #[test]
    fn unknown_category_depends_on_mode() {
        let e = Expense::parse("Gym:500:luxury", ParseMode::Lenient).unwrap();
        assert_eq!(e.category, Category::Need);
        assert!(Expense::parse("Gym:500:luxury", ParseMode::Strict).is_err());
    }

    #[test]
    fn bad_amount_depends_on_mode() {
        let e = Expense::parse("Gym:lots:want", ParseMode::Lenient).unwrap();
        assert_eq!(e.amount, 0.0);
        assert!(Expense::parse("Gym:lots:want", ParseMode::Strict).is_err());
    }

    #[test]
    fn request_drops_non_positive_expenses() {
        let req = BudgetRequest::new(
            30_000.0,
            vec![
                Expense::parse("Rent:15000:need", ParseMode::Lenient).unwrap(),
                Expense::parse("Nothing:0:want", ParseMode::Lenient).unwrap(),
                Expense::parse("Refund:-20:want", ParseMode::Lenient).unwrap(),
            ],
        );
        assert_eq!(req.expenses.len(), 1);
        assert_eq!(req.total_expenses(), 15_000.0);
    }

    #[test]
    fn validate_income_and_expenses() {
        let err = BudgetRequest::new(0.0, vec![]).validate().unwrap_err();
        assert_eq!(err.severity(), Severity::Error);

        let err = BudgetRequest::new(30_000.0, vec![]).validate().unwrap_err();
        assert_eq!(err.severity(), Severity::Warning);

        let ok = BudgetRequest::new(
            30_000.0,
            vec![Expense::parse("Rent:15000", ParseMode::Lenient).unwrap()],
        );
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn request_wire_shape() {
        let req = BudgetRequest::new(
            30_000.0,
            vec![Expense::parse("Savings:6000:savings", ParseMode::Lenient).unwrap()],
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["ingresos"], 30_000.0);
        assert_eq!(json["gastos"][0]["descripcion"], "Savings");
        assert_eq!(json["gastos"][0]["monto"], 6000.0);
        assert_eq!(json["gastos"][0]["categoria"], "ahorro");
    }

    #[test]
    fn decode_analysis() {
        let json = r#"{
            "ingresos": 30000,
            "moneda": "COP",
            "totales": {"necesidades": 19000, "deseos": 3000, "ahorro": 0},
            "porcentajes": {"necesidades": 63.3, "deseos": 10.0, "ahorro": 0.0},
            "diagnosticos": [
                {"tipo": "peligro", "mensaje": "Needs are high", "consejo": "Review fixed costs"},
                {"tipo": "exito", "mensaje": "Wants are fine", "consejo": "Keep going"}
            ],
            "ahorro_disponible": 6000.0
        }"#;
        let a: BudgetAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(a.income, 30_000.0);
        assert_eq!(a.percentages.needs, 63.3);
        assert_eq!(a.totals.wants, 3000.0);
        assert_eq!(a.diagnostics.len(), 2);
        assert_eq!(a.diagnostics[0].kind, DiagnosticKind::Danger);
        assert_eq!(a.available_savings, 6000.0);
    }

    #[test]
    fn total_of_no_expenses_is_zero() {
        assert_eq!(total_expenses(&[]), 0.0);
    }
}
