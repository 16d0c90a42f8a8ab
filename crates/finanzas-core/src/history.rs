//! Entries kept in the local goal and analysis histories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetAnalysis;
use crate::goal::GoalProjection;
use crate::interest::{InterestInput, InterestResult};

/// Name given to goals saved without one.
pub const UNNAMED_GOAL: &str = "Unnamed goal";

/// Last interest calculation, inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestSnapshot {
    pub initial: f64,
    pub monthly: f64,
    pub rate: f64,
    pub years: f64,
    pub total: f64,
    pub gain: f64,
}

impl InterestSnapshot {
    #[must_use]
    pub fn new(input: &InterestInput, result: &InterestResult) -> Self {
        Self {
            initial: input.initial_principal,
            monthly: input.monthly_contribution,
            rate: input.annual_rate_percent,
            years: input.years,
            total: result.final_balance,
            gain: result.net_gain,
        }
    }

    /// Whether every field survives a JSON round trip. JSON has no
    /// representation for NaN or infinities.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.initial,
            self.monthly,
            self.rate,
            self.years,
            self.total,
            self.gain,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// The inputs that produced this snapshot.
    #[must_use]
    pub fn input(&self) -> InterestInput {
        InterestInput::new(self.initial, self.monthly, self.rate, self.years)
    }
}

/// A saved goal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalHistoryEntry {
    pub date: NaiveDate,
    pub name: String,
    pub target_amount: f64,
    pub current_savings: f64,
    pub projection: GoalProjection,
}

impl GoalHistoryEntry {
    /// Build an entry; a blank name becomes [`UNNAMED_GOAL`].
    #[must_use]
    pub fn new(
        date: NaiveDate,
        name: Option<&str>,
        target_amount: f64,
        current_savings: f64,
        projection: GoalProjection,
    ) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED_GOAL)
            .to_string();
        Self {
            date,
            name,
            target_amount,
            current_savings,
            projection,
        }
    }
}

/// A saved budget analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisHistoryEntry {
    pub date: NaiveDate,
    pub income: f64,
    pub total_expenses: f64,
    pub analysis: BudgetAnalysis,
}

impl AnalysisHistoryEntry {
    /// Savings share of income recorded by this analysis.
    #[must_use]
    pub fn savings_percent(&self) -> f64 {
        self.analysis.percentages.savings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::compute_compound_interest;

    #[test]
    fn snapshot_keeps_inputs_and_outputs() {
        let input = InterestInput::new(10_000.0, 1_000.0, 12.0, 1.0);
        let result = compute_compound_interest(&input).unwrap();
        let snap = InterestSnapshot::new(&input, &result);
        assert_eq!(snap.input(), input);
        assert_eq!(snap.total, result.final_balance);
        assert_eq!(snap.gain, result.net_gain);
    }

    #[test]
    fn snapshot_finiteness() {
        let input = InterestInput::new(10_000.0, 1_000.0, 12.0, 1.0);
        let result = compute_compound_interest(&input).unwrap();
        assert!(InterestSnapshot::new(&input, &result).is_finite());

        let input = InterestInput::new(f64::INFINITY, 0.0, 5.0, 1.0);
        let result = compute_compound_interest(&input).unwrap();
        assert!(!InterestSnapshot::new(&input, &result).is_finite());
    }

    #[test]
    fn goal_name_defaults() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let p = GoalProjection::Reached { surplus: 0.0 };
        let unnamed = GoalHistoryEntry::new(date, Some("  "), 1.0, 2.0, p.clone());
        assert_eq!(unnamed.name, UNNAMED_GOAL);
        let named = GoalHistoryEntry::new(date, Some("Emergency fund"), 1.0, 2.0, p);
        assert_eq!(named.name, "Emergency fund");
    }
}
