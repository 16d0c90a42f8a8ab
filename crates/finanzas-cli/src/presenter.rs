//! Result presenters: human-readable text or JSON.

use std::io;

use serde_json::json;

use finanzas_core::budget::{BudgetAnalysis, BudgetRequest};
use finanzas_core::format::{format_currency, format_percent, format_ratio, format_signed_percent};
use finanzas_core::goal::{annual_share_percent, monthly_progress_percent, GoalProjection, GoalRequest};
use finanzas_core::history::{AnalysisHistoryEntry, GoalHistoryEntry};
use finanzas_core::interest::{InterestInput, InterestResult};
use finanzas_core::stats::HistoryStats;

use crate::notify::NotificationKind;
use crate::output::{render_bar, row, write_json, BAR_WIDTH};
use crate::ui::{emphasize, header, signed};

/// Presents calculation results to the user.
pub trait ResultPresenter {
    fn present_interest(&self, input: &InterestInput, result: &InterestResult);

    fn present_goal(&self, request: &GoalRequest, projection: &GoalProjection);

    fn present_budget(&self, request: &BudgetRequest, analysis: &BudgetAnalysis);

    /// `None` when there is no history to summarize.
    fn present_stats(&self, stats: Option<&HistoryStats>);

    fn present_goal_history(&self, history: &[GoalHistoryEntry]);

    fn present_analysis_history(&self, history: &[AnalysisHistoryEntry]);
}

/// Plain-text presenter for the terminal.
pub struct CliPresenter {
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ResultPresenter for CliPresenter {
    fn present_interest(&self, input: &InterestInput, result: &InterestResult) {
        if self.quiet {
            println!("{:.2}", result.final_balance);
            return;
        }
        println!("{}", render_interest(input, result));
    }

    fn present_goal(&self, request: &GoalRequest, projection: &GoalProjection) {
        println!("{}", render_goal(request, projection));
    }

    fn present_budget(&self, request: &BudgetRequest, analysis: &BudgetAnalysis) {
        println!("{}", render_budget(request, analysis));
    }

    fn present_stats(&self, stats: Option<&HistoryStats>) {
        println!("{}", render_stats(stats));
    }

    fn present_goal_history(&self, history: &[GoalHistoryEntry]) {
        println!("{}", render_goal_history(history));
    }

    fn present_analysis_history(&self, history: &[AnalysisHistoryEntry]) {
        println!("{}", render_analysis_history(history));
    }
}

/// Machine-readable presenter writing one JSON document per result.
pub struct JsonPresenter;

impl JsonPresenter {
    fn emit(value: &serde_json::Value) {
        if let Err(e) = write_json(&mut io::stdout(), value) {
            tracing::error!(error = %e, "failed to write JSON output");
        }
    }
}

impl ResultPresenter for JsonPresenter {
    fn present_interest(&self, input: &InterestInput, result: &InterestResult) {
        Self::emit(&json!({ "input": input, "result": result }));
    }

    fn present_goal(&self, request: &GoalRequest, projection: &GoalProjection) {
        Self::emit(&json!({ "request": request, "projection": projection }));
    }

    fn present_budget(&self, request: &BudgetRequest, analysis: &BudgetAnalysis) {
        Self::emit(&json!({ "request": request, "analysis": analysis }));
    }

    fn present_stats(&self, stats: Option<&HistoryStats>) {
        Self::emit(&json!({ "stats": stats }));
    }

    fn present_goal_history(&self, history: &[GoalHistoryEntry]) {
        Self::emit(&json!(history));
    }

    fn present_analysis_history(&self, history: &[AnalysisHistoryEntry]) {
        Self::emit(&json!(history));
    }
}

/// Render a compound interest result.
#[must_use]
pub fn render_interest(input: &InterestInput, result: &InterestResult) -> String {
    [
        header("Compound interest"),
        row(
            &format!("Total after {} years:", input.years),
            &emphasize(&format_currency(result.final_balance)),
        ),
        row("Total invested:", &format_currency(result.total_contributed)),
        row(
            "Compound interest earnings:",
            &signed(&format_currency(result.net_gain), result.net_gain),
        ),
        row("Yield:", &format_ratio(result.yield_ratio)),
    ]
    .join("\n")
}

/// Render a goal projection.
#[must_use]
pub fn render_goal(request: &GoalRequest, projection: &GoalProjection) -> String {
    let mut lines = vec![header("Savings goal")];
    match projection {
        GoalProjection::ByTerm {
            months,
            required_monthly,
            estimated_date,
            ..
        } => {
            lines.push(row(
                "Required monthly saving:",
                &emphasize(&format_currency(*required_monthly)),
            ));
            lines.push(format!("  To reach your goal in {months} months"));
            lines.push(row("Estimated date:", estimated_date));
            match projection.is_demanding() {
                Some(true) => lines.push(format!(
                    "  {} The required saving is high. Consider extending the term or reducing the goal.",
                    NotificationKind::Warning.tag()
                )),
                Some(false) => lines.push(format!(
                    "  {} The required saving is achievable. Keep going!",
                    NotificationKind::Success.tag()
                )),
                None => {}
            }
        }
        GoalProjection::BySavings {
            months,
            years,
            estimated_date,
            ..
        } => {
            let progress = monthly_progress_percent(request.monthly_savings, request.target_amount);
            let share = annual_share_percent(request.monthly_savings, request.target_amount);
            lines.push(row(
                "Time needed:",
                &emphasize(&format!("{months} months ({years} years)")),
            ));
            lines.push(row("Estimated date:", estimated_date));
            lines.push(row(
                "Monthly progress:",
                &format!("{} {}", render_bar(progress, BAR_WIDTH), format_percent(progress)),
            ));
            lines.push(format!(
                "  You are saving {} of your goal each year",
                format_percent(share)
            ));
        }
        GoalProjection::Reached { surplus } => {
            lines.push(format!(
                "  {} You already reached your goal!",
                NotificationKind::Success.tag()
            ));
            lines.push(row("Surplus:", &format_currency(*surplus)));
        }
        GoalProjection::Rejected { message } => {
            lines.push(format!("  {} {message}", NotificationKind::Error.tag()));
        }
    }
    lines.join("\n")
}

/// Render a 50/30/20 analysis.
#[must_use]
pub fn render_budget(request: &BudgetRequest, analysis: &BudgetAnalysis) -> String {
    let pct = &analysis.percentages;
    let mut lines = vec![
        header("50/30/20 analysis"),
        row("Monthly income:", &format_currency(analysis.income)),
        row("Total expenses:", &format_currency(request.total_expenses())),
        bucket_row("Needs (50%):", pct.needs),
        bucket_row("Wants (30%):", pct.wants),
        bucket_row("Savings (20%):", pct.savings),
    ];

    if !analysis.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push(header("Personalized diagnosis"));
        for diag in &analysis.diagnostics {
            lines.push(format!(
                "  {} {}",
                NotificationKind::from(diag.kind).tag(),
                diag.message
            ));
            lines.push(format!("       Tip: {}", diag.advice));
        }
    }

    lines.push(String::new());
    lines.push(row(
        "Available for goals:",
        &format!("{} per month", emphasize(&format_currency(analysis.available_savings))),
    ));
    lines.join("\n")
}

fn bucket_row(label: &str, percent: f64) -> String {
    row(
        label,
        &format!("{} {}", render_bar(percent, BAR_WIDTH), format_percent(percent)),
    )
}

/// Render history statistics.
#[must_use]
pub fn render_stats(stats: Option<&HistoryStats>) -> String {
    let Some(s) = stats else {
        return "No analyses recorded yet.".to_string();
    };
    [
        header("Your progress"),
        row("Analyses performed:", &s.total_analyses.to_string()),
        row("Average savings:", &format_percent(s.average_savings)),
        row(
            "Total improvement:",
            &signed(&format_signed_percent(s.improvement), s.improvement),
        ),
        row("Best record:", &format_percent(s.best_savings)),
    ]
    .join("\n")
}

/// Render the saved goal projections, newest last.
#[must_use]
pub fn render_goal_history(history: &[GoalHistoryEntry]) -> String {
    if history.is_empty() {
        return "No goals recorded yet.".to_string();
    }
    let mut lines = vec![header("Goal history")];
    for entry in history {
        lines.push(format!(
            "  {}  {:<24} {:>12}  {}",
            entry.date.format("%Y-%m-%d"),
            entry.name,
            format_currency(entry.target_amount),
            projection_summary(&entry.projection)
        ));
    }
    lines.join("\n")
}

/// Render the saved budget analyses, newest last.
#[must_use]
pub fn render_analysis_history(history: &[AnalysisHistoryEntry]) -> String {
    if history.is_empty() {
        return "No analyses recorded yet.".to_string();
    }
    let mut lines = vec![header("Analysis history")];
    for entry in history {
        lines.push(format!(
            "  {}  income {:>12}  expenses {:>12}  savings {}",
            entry.date.format("%Y-%m-%d"),
            format_currency(entry.income),
            format_currency(entry.total_expenses),
            format_percent(entry.savings_percent())
        ));
    }
    lines.join("\n")
}

fn projection_summary(projection: &GoalProjection) -> String {
    match projection {
        GoalProjection::ByTerm {
            months,
            required_monthly,
            ..
        } => format!("{}/month for {months} months", format_currency(*required_monthly)),
        GoalProjection::BySavings { months, .. } => format!("{months} months to go"),
        GoalProjection::Reached { .. } => "reached".to_string(),
        GoalProjection::Rejected { message } => format!("rejected: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finanzas_core::budget::{Buckets, Diagnostic, DiagnosticKind, Expense};
    use finanzas_core::input::ParseMode;
    use finanzas_core::interest::compute_compound_interest;

    fn goal_request(monthly: f64) -> GoalRequest {
        GoalRequest {
            target_amount: 120_000.0,
            current_savings: 15_000.0,
            monthly_savings: monthly,
            desired_months: None,
        }
    }

    fn analysis() -> (BudgetRequest, BudgetAnalysis) {
        let request = BudgetRequest::new(
            30_000.0,
            vec![
                Expense::parse("Rent:15000:need", ParseMode::Lenient).unwrap(),
                Expense::parse("Groceries:4000:need", ParseMode::Lenient).unwrap(),
                Expense::parse("Going out:3000:want", ParseMode::Lenient).unwrap(),
            ],
        );
        let analysis = BudgetAnalysis {
            income: 30_000.0,
            totals: Buckets {
                needs: 19_000.0,
                wants: 3000.0,
                savings: 0.0,
            },
            percentages: Buckets {
                needs: 63.3,
                wants: 10.0,
                savings: 0.0,
            },
            diagnostics: vec![Diagnostic {
                kind: DiagnosticKind::Danger,
                message: "Needs are 63.3% of your income".into(),
                advice: "Review fixed costs".into(),
            }],
            available_savings: 6000.0,
        };
        (request, analysis)
    }

    #[test]
    fn interest_render_shows_figures() {
        let input = InterestInput::new(10_000.0, 1_000.0, 12.0, 1.0);
        let result = compute_compound_interest(&input).unwrap();
        let text = render_interest(&input, &result);
        assert!(text.contains("Total after 1 years"));
        assert!(text.contains("$23,951"));
        assert!(text.contains("$22,000"));
        assert!(text.contains("$1,951"));
        assert!(text.contains("8.9%"));
    }

    #[test]
    fn interest_render_without_contributions() {
        let input = InterestInput::new(0.0, 0.0, 5.0, 2.0);
        let result = compute_compound_interest(&input).unwrap();
        assert!(render_interest(&input, &result).contains("n/a"));
    }

    #[test]
    fn goal_by_term_flags_high_saving() {
        let projection = GoalProjection::ByTerm {
            months: 12.0,
            required_monthly: 8750.0,
            remaining: 105_000.0,
            estimated_date: "18/10/2027".into(),
        };
        let text = render_goal(&goal_request(0.0), &projection);
        assert!(text.contains("$8,750"));
        assert!(text.contains("12 months"));
        assert!(text.contains("18/10/2027"));
        assert!(text.contains("high"));
    }

    #[test]
    fn goal_by_term_achievable() {
        let projection = GoalProjection::ByTerm {
            months: 36.0,
            required_monthly: 2916.67,
            remaining: 105_000.0,
            estimated_date: "18/10/2029".into(),
        };
        assert!(render_goal(&goal_request(0.0), &projection).contains("achievable"));
    }

    #[test]
    fn goal_by_savings_shows_progress() {
        let projection = GoalProjection::BySavings {
            months: 21.0,
            years: 1.8,
            monthly: 5000.0,
            remaining: 105_000.0,
            estimated_date: "18/07/2028".into(),
        };
        let text = render_goal(&goal_request(5000.0), &projection);
        assert!(text.contains("21 months (1.8 years)"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("You are saving 50.0% of your goal each year"));
    }

    #[test]
    fn goal_reached_and_rejected() {
        let reached = render_goal(&goal_request(0.0), &GoalProjection::Reached { surplus: 500.0 });
        assert!(reached.contains("already reached"));
        assert!(reached.contains("$500"));

        let rejected = render_goal(
            &goal_request(0.0),
            &GoalProjection::Rejected {
                message: "bad target".into(),
            },
        );
        assert!(rejected.contains("[ERROR] bad target"));
    }

    #[test]
    fn budget_render_has_bars_and_diagnostics() {
        let (request, analysis) = analysis();
        let text = render_budget(&request, &analysis);
        assert!(text.contains("$30,000"));
        assert!(text.contains("$22,000"));
        assert!(text.contains("63.3%"));
        assert!(text.contains("[ERROR] Needs are 63.3% of your income"));
        assert!(text.contains("Tip: Review fixed costs"));
        assert!(text.contains("$6,000"));
    }

    #[test]
    fn stats_render() {
        assert_eq!(render_stats(None), "No analyses recorded yet.");
        let stats = HistoryStats {
            total_analyses: 3,
            average_savings: 17.0,
            improvement: 6.0,
            best_savings: 25.0,
        };
        let text = render_stats(Some(&stats));
        assert!(text.contains("17.0%"));
        assert!(text.contains("+6.0%"));
        assert!(text.contains("25.0%"));
    }

    #[test]
    fn history_renders() {
        assert_eq!(render_goal_history(&[]), "No goals recorded yet.");
        assert_eq!(render_analysis_history(&[]), "No analyses recorded yet.");

        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let goals = vec![GoalHistoryEntry::new(
            date,
            Some("Emergency fund"),
            100_000.0,
            15_000.0,
            GoalProjection::BySavings {
                months: 17.0,
                years: 1.4,
                monthly: 5000.0,
                remaining: 85_000.0,
                estimated_date: String::new(),
            },
        )];
        let text = render_goal_history(&goals);
        assert!(text.contains("2026-10-18"));
        assert!(text.contains("Emergency fund"));
        assert!(text.contains("17 months to go"));

        let (request, analysis) = analysis();
        let analyses = vec![AnalysisHistoryEntry {
            date,
            income: request.income,
            total_expenses: request.total_expenses(),
            analysis,
        }];
        assert!(render_analysis_history(&analyses).contains("savings 0.0%"));
    }

    #[test]
    fn presenters_do_not_panic() {
        let input = InterestInput::new(100.0, 10.0, 5.0, 1.0);
        let result = compute_compound_interest(&input).unwrap();
        CliPresenter::new(false).present_interest(&input, &result);
        CliPresenter::new(true).present_interest(&input, &result);
        JsonPresenter.present_interest(&input, &result);
        JsonPresenter.present_stats(None);
    }
}
