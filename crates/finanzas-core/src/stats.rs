//! Progress statistics over the analysis history.

use serde::Serialize;

use crate::history::AnalysisHistoryEntry;

/// Summary of the stored budget analyses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_analyses: usize,
    /// Mean savings share of income, in percent.
    pub average_savings: f64,
    /// Savings share of the newest analysis minus that of the oldest.
    pub improvement: f64,
    pub best_savings: f64,
}

/// Summarize `history` (oldest first). `None` when it is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_stats(history: &[AnalysisHistoryEntry]) -> Option<HistoryStats> {
    let first = history.first()?;
    let last = history.last()?;

    let total: f64 = history.iter().map(AnalysisHistoryEntry::savings_percent).sum();
    let best = history
        .iter()
        .map(AnalysisHistoryEntry::savings_percent)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(HistoryStats {
        total_analyses: history.len(),
        average_savings: total / history.len() as f64,
        improvement: last.savings_percent() - first.savings_percent(),
        best_savings: best,
    })
}
