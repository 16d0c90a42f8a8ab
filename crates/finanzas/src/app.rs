//! Application entry point and dispatch.

use anyhow::{Context, Result};
use clap::CommandFactory;

use finanzas_api::{FinanceBackend, HttpBackend};
use finanzas_cli::spinner::with_spinner;
use finanzas_cli::{CliPresenter, JsonPresenter, Notifier, ResultPresenter};
use finanzas_core::budget::{BudgetRequest, Expense};
use finanzas_core::goal::{GoalProjection, GoalRequest};
use finanzas_core::history::{AnalysisHistoryEntry, GoalHistoryEntry, InterestSnapshot};
use finanzas_core::input::ParseMode;
use finanzas_core::interest::{compute_with_policy, InterestInput};
use finanzas_core::stats::compute_stats;
use finanzas_core::FinError;
use finanzas_store::{records, LocalStore};

use crate::config::{AppConfig, BudgetArgs, Command, GoalArgs, HistoryKind, InterestArgs};
use crate::errors::AppError;
use crate::version;

/// Everything a command needs besides its own arguments.
pub struct Session {
    pub store: LocalStore,
    pub mode: ParseMode,
    pub notifier: Notifier,
    pub presenter: Box<dyn ResultPresenter>,
    /// Suppress the spinner (quiet or JSON output).
    pub hide_progress: bool,
}

impl Session {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let store = config
            .store_dir
            .clone()
            .map_or_else(LocalStore::open_default, LocalStore::new);
        let presenter: Box<dyn ResultPresenter> = if config.json {
            Box::new(JsonPresenter)
        } else {
            Box::new(CliPresenter::new(config.quiet))
        };
        Self {
            store,
            mode: config.parse_mode(),
            notifier: Notifier::new(config.quiet || config.json),
            presenter,
            hide_progress: config.quiet || config.json,
        }
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    tracing::debug!(version = %version::full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command();
        finanzas_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        AppConfig::command().print_help()?;
        return Ok(());
    };

    let session = Session::from_config(config);
    tracing::debug!(store = %session.store.dir().display(), "using local store");

    match command {
        Command::Interest(args) => run_interest(&session, args),
        Command::Goal(args) => {
            let backend = HttpBackend::new(&config.api_url, config.timeout_duration()?)?;
            run_goal(&session, &backend, args)
        }
        Command::Budget(args) => {
            let backend = HttpBackend::new(&config.api_url, config.timeout_duration()?)?;
            run_budget(&session, &backend, args)
        }
        Command::Stats => {
            run_stats(&session);
            Ok(())
        }
        Command::History { kind } => {
            run_history(&session, *kind);
            Ok(())
        }
    }
}

/// Compute compound interest and save the inputs for `--last`.
pub fn run_interest(session: &Session, args: &InterestArgs) -> Result<()> {
    let base = if args.last {
        let snapshot = records::last_interest(&session.store).ok_or(AppError::NothingSaved)?;
        session.notifier.info("Loaded your last calculation");
        snapshot.input()
    } else {
        InterestInput::default()
    };

    let mode = session.mode;
    let input = InterestInput::new(
        value_or(mode, "initial investment", args.initial.as_deref(), base.initial_principal)?,
        value_or(mode, "monthly contribution", args.monthly.as_deref(), base.monthly_contribution)?,
        value_or(mode, "annual rate", args.rate.as_deref(), base.annual_rate_percent)?,
        value_or(mode, "years", args.years.as_deref(), base.years)?,
    );
    if mode == ParseMode::Strict {
        input.check_non_negative()?;
    }

    let result = compute_with_policy(&input, args.policy)?;
    session.presenter.present_interest(&input, &result);

    if !records::save_last_interest(&session.store, &InterestSnapshot::new(&input, &result)) {
        session.notifier.warning("Could not save this calculation");
    }
    Ok(())
}

/// Ask the finance service for a goal projection and record it.
pub fn run_goal(session: &Session, backend: &dyn FinanceBackend, args: &GoalArgs) -> Result<()> {
    let mode = session.mode;
    let request = GoalRequest {
        target_amount: mode.parse_opt("target amount", args.target.as_deref())?,
        current_savings: mode.parse_opt("current savings", args.current.as_deref())?,
        monthly_savings: mode.parse_opt("monthly saving", args.monthly.as_deref())?,
        desired_months: desired_months(mode, args.months.as_deref())?,
    };
    request.validate()?;

    let projection = with_spinner("Calculating...", session.hide_progress, || {
        backend.project_goal(&request)
    })
    .context("Error computing the projection")?;

    session.presenter.present_goal(&request, &projection);
    if let GoalProjection::Rejected { message } = &projection {
        return Err(AppError::Rejected(message.clone()).into());
    }

    let entry = GoalHistoryEntry::new(
        today(),
        args.name.as_deref(),
        request.target_amount,
        request.current_savings,
        projection,
    );
    if records::record_goal(&session.store, entry) {
        session.notifier.success("Projection saved to your goal history");
    }
    Ok(())
}

/// Ask the finance service for a 50/30/20 analysis and record it.
pub fn run_budget(session: &Session, backend: &dyn FinanceBackend, args: &BudgetArgs) -> Result<()> {
    let mode = session.mode;
    let income = mode.parse_opt("income", args.income.as_deref())?;
    let expenses = args
        .expenses
        .iter()
        .map(|raw| Expense::parse(raw, mode))
        .collect::<Result<Vec<_>, FinError>>()?;
    let request = BudgetRequest::new(income, expenses);
    request.validate()?;

    let analysis = with_spinner("Analyzing...", session.hide_progress, || {
        backend.analyze_budget(&request)
    })
    .context("Error analyzing the budget")?;

    session.presenter.present_budget(&request, &analysis);

    let entry = AnalysisHistoryEntry {
        date: today(),
        income: request.income,
        total_expenses: request.total_expenses(),
        analysis,
    };
    if records::record_analysis(&session.store, entry) {
        session.notifier.success("Analysis saved to your history");
    }
    Ok(())
}

/// Summarize the analysis history.
pub fn run_stats(session: &Session) {
    let history = records::analysis_history(&session.store);
    session.presenter.present_stats(compute_stats(&history).as_ref());
}

pub fn run_history(session: &Session, kind: HistoryKind) {
    match kind {
        HistoryKind::Goals => session
            .presenter
            .present_goal_history(&records::goal_history(&session.store)),
        HistoryKind::Analyses => session
            .presenter
            .present_analysis_history(&records::analysis_history(&session.store)),
    }
}

/// Parse `raw` if given, otherwise keep `fallback`.
fn value_or(mode: ParseMode, field: &str, raw: Option<&str>, fallback: f64) -> Result<f64, FinError> {
    raw.map_or(Ok(fallback), |r| mode.parse(field, r))
}

/// Desired term in whole months. Lenient mode truncates and treats
/// non-positive terms as absent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn desired_months(mode: ParseMode, raw: Option<&str>) -> Result<Option<u32>, FinError> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };
    let value = mode.parse("desired term", raw)?;
    match mode {
        ParseMode::Strict if value < 0.0 || value.fract() > 0.0 => Err(FinError::InvalidInput(
            format!("desired term: '{raw}' is not a whole number of months"),
        )),
        _ if value >= 1.0 => Ok(Some(value.min(f64::from(u32::MAX)) as u32)),
        _ => Ok(None),
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
