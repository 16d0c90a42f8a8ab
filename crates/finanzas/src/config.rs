//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use finanzas_api::DEFAULT_API_URL;
use finanzas_core::interest::MonthPolicy;
use finanzas_core::input::ParseMode;

use crate::errors::AppError;

/// finanzas: compound interest, savings goals and 50/30/20 budgets.
#[derive(Parser, Debug)]
#[command(name = "finanzas", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Reject malformed numbers instead of reading them as zero.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Quiet mode (only errors on stderr, bare figures on stdout).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding saved calculations and histories.
    #[arg(long, global = true, env = "FINANZAS_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Base URL of the finance service.
    #[arg(long, global = true, env = "FINANZAS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for finance service requests (e.g., "10s", "500ms", "1m").
    #[arg(long, global = true, default_value = "10s")]
    pub timeout: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project an investment with monthly contributions.
    Interest(InterestArgs),
    /// Project a savings goal with the finance service.
    Goal(GoalArgs),
    /// Analyze a monthly budget against the 50/30/20 rule.
    Budget(BudgetArgs),
    /// Summarize the saved budget analyses.
    Stats,
    /// Show saved goal projections or budget analyses.
    History {
        #[arg(value_enum)]
        kind: HistoryKind,
    },
}

/// Inputs of the compound interest calculator. Values are read as text so the
/// active parsing mode decides how malformed numbers are handled.
#[derive(Args, Debug, Default)]
pub struct InterestArgs {
    /// Initial investment.
    #[arg(long, allow_hyphen_values = true)]
    pub initial: Option<String>,

    /// Contribution at the end of every month.
    #[arg(long, allow_hyphen_values = true)]
    pub monthly: Option<String>,

    /// Nominal annual interest rate, in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Investment horizon in years.
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Start from the last saved calculation; explicit flags override it.
    #[arg(long)]
    pub last: bool,

    /// How a fractional number of months is accrued: ceil, floor or reject.
    #[arg(long, default_value_t = MonthPolicy::Ceil)]
    pub policy: MonthPolicy,
}

/// Inputs of a savings goal projection.
#[derive(Args, Debug, Default)]
pub struct GoalArgs {
    /// Amount to reach.
    #[arg(long)]
    pub target: Option<String>,

    /// Savings already set aside.
    #[arg(long)]
    pub current: Option<String>,

    /// Amount saved every month.
    #[arg(long)]
    pub monthly: Option<String>,

    /// Desired term in months.
    #[arg(long)]
    pub months: Option<String>,

    /// Name stored with the projection.
    #[arg(long)]
    pub name: Option<String>,
}

/// Inputs of a budget analysis.
#[derive(Args, Debug, Default)]
pub struct BudgetArgs {
    /// Monthly income.
    #[arg(long)]
    pub income: Option<String>,

    /// Expense as `description:amount:category` (need, want or savings).
    #[arg(long = "expense", short = 'e')]
    pub expenses: Vec<String>,
}

/// Which history to show.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Goals,
    Analyses,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Number parsing mode selected by `--strict`.
    #[must_use]
    pub fn parse_mode(&self) -> ParseMode {
        ParseMode::from_strict_flag(self.strict)
    }

    /// Parse the timeout string into a Duration.
    pub fn timeout_duration(&self) -> Result<Duration, AppError> {
        parse_duration(&self.timeout)
            .filter(|d| !d.is_zero())
            .ok_or_else(|| AppError::Config(format!("invalid timeout '{}'", self.timeout)))
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
