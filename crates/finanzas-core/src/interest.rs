//! Compound interest accrual with fixed end-of-month contributions.
//!
//! The balance starts at the initial principal and, once per month, grows by
//! the monthly rate before the contribution is added.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_MONTHS, MONTHS_PER_YEAR, MONTH_EPSILON};
use crate::error::FinError;

/// Inputs to a compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InterestInput {
    /// Amount invested before any contribution.
    pub initial_principal: f64,
    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
    /// Nominal annual rate, in percent. May be zero or negative.
    pub annual_rate_percent: f64,
    /// Investment horizon in years.
    pub years: f64,
}

impl InterestInput {
    #[must_use]
    pub fn new(
        initial_principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        years: f64,
    ) -> Self {
        Self {
            initial_principal,
            monthly_contribution,
            annual_rate_percent,
            years,
        }
    }

    /// Rate applied each month.
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / MONTHS_PER_YEAR
    }

    /// Real-valued month count (`years * 12`, not rounded).
    #[must_use]
    pub fn month_count(&self) -> f64 {
        self.years * MONTHS_PER_YEAR
    }

    /// Reject negative amounts. Only used when strict validation is on.
    pub fn check_non_negative(&self) -> Result<(), FinError> {
        if self.initial_principal < 0.0 {
            return Err(FinError::InvalidInput(format!(
                "initial principal must not be negative: {}",
                self.initial_principal
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(FinError::InvalidInput(format!(
                "monthly contribution must not be negative: {}",
                self.monthly_contribution
            )));
        }
        Ok(())
    }
}

/// Outcome of a compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub final_balance: f64,
    /// Principal plus every contribution.
    pub total_contributed: f64,
    /// `final_balance - total_contributed`.
    pub net_gain: f64,
    /// `net_gain / total_contributed`, `None` when that ratio is not finite.
    pub yield_ratio: Option<f64>,
    /// Number of accrual steps actually applied.
    pub months_accrued: u32,
}

/// What to do when `years * 12` is not a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthPolicy {
    /// Accrue a partial month as a full one.
    #[default]
    Ceil,
    /// Drop the partial month.
    Floor,
    /// Refuse the calculation.
    Reject,
}

impl MonthPolicy {
    /// Number of accrual steps for a (positive, bounded) month count.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn steps(self, months: f64, years: f64) -> Result<u32, FinError> {
        // counts within MONTH_EPSILON of a whole month are that whole month
        let rounded = months.round();
        let whole = (months - rounded).abs() <= MONTH_EPSILON;
        let steps = match self {
            _ if whole => rounded,
            Self::Ceil => months.ceil(),
            Self::Floor => months.floor(),
            Self::Reject => return Err(FinError::FractionalMonths(years)),
        };
        Ok(steps as u32)
    }
}

impl FromStr for MonthPolicy {
    type Err = FinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            "reject" => Ok(Self::Reject),
            other => Err(FinError::InvalidInput(format!(
                "unknown month policy '{other}' (expected ceil, floor or reject)"
            ))),
        }
    }
}

impl fmt::Display for MonthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceil => f.write_str("ceil"),
            Self::Floor => f.write_str("floor"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// Compute compound interest with the default month policy.
///
/// # Example
/// ```
/// use finanzas_core::interest::{compute_compound_interest, InterestInput};
///
/// let result = compute_compound_interest(&InterestInput::new(1000.0, 0.0, 0.0, 5.0)).unwrap();
/// assert_eq!(result.final_balance, 1000.0);
/// ```
pub fn compute_compound_interest(input: &InterestInput) -> Result<InterestResult, FinError> {
    compute_with_policy(input, MonthPolicy::default())
}

/// Compute compound interest, resolving fractional month counts with `policy`.
///
/// Fails with [`FinError::InvalidDuration`] before any accrual when `years`
/// is not a positive finite number.
pub fn compute_with_policy(
    input: &InterestInput,
    policy: MonthPolicy,
) -> Result<InterestResult, FinError> {
    let years = input.years;
    if !years.is_finite() || years <= 0.0 {
        return Err(FinError::InvalidDuration(years));
    }

    let months = input.month_count();
    if months > f64::from(MAX_MONTHS) {
        return Err(FinError::DurationTooLong(years));
    }
    let steps = policy.steps(months, years)?;

    let growth = 1.0 + input.monthly_rate();
    let mut balance = input.initial_principal;
    for _ in 0..steps {
        balance = balance * growth + input.monthly_contribution;
    }

    let total_contributed = input.initial_principal + input.monthly_contribution * months;
    let net_gain = balance - total_contributed;

    tracing::debug!(
        steps,
        %policy,
        final_balance = balance,
        "compound interest computed"
    );

    Ok(InterestResult {
        final_balance: balance,
        total_contributed,
        net_gain,
        yield_ratio: yield_ratio(net_gain, total_contributed),
        months_accrued: steps,
    })
}

/// `net_gain / total_contributed`, or `None` when the ratio is not finite
/// (nothing contributed).
#[must_use]
pub fn yield_ratio(net_gain: f64, total_contributed: f64) -> Option<f64> {
    let ratio = net_gain / total_contributed;
    ratio.is_finite().then_some(ratio)
}
