//! Typed records kept in the store: the last interest calculation and the
//! bounded goal and analysis histories.

use serde::de::DeserializeOwned;
use serde::Serialize;

use finanzas_core::constants::HISTORY_LIMIT;
use finanzas_core::history::{AnalysisHistoryEntry, GoalHistoryEntry, InterestSnapshot};

use crate::io::LocalStore;
use crate::{KEY_ANALYSIS_HISTORY, KEY_GOAL_HISTORY, KEY_LAST_INTEREST};

/// Append `entry` to the list under `key`, dropping the oldest entries
/// beyond `limit`.
pub fn push_bounded<T>(store: &LocalStore, key: &str, entry: T, limit: usize) -> bool
where
    T: Serialize + DeserializeOwned,
{
    let mut list: Vec<T> = store.load(key).unwrap_or_default();
    list.push(entry);
    if list.len() > limit {
        let excess = list.len() - limit;
        list.drain(..excess);
    }
    store.save(key, &list)
}

/// Save the last calculation. Snapshots with non-finite figures are refused,
/// since they could not be read back.
pub fn save_last_interest(store: &LocalStore, snapshot: &InterestSnapshot) -> bool {
    if !snapshot.is_finite() {
        tracing::warn!(?snapshot, "not saving non-finite interest snapshot");
        return false;
    }
    store.save(KEY_LAST_INTEREST, snapshot)
}

pub fn last_interest(store: &LocalStore) -> Option<InterestSnapshot> {
    store.load(KEY_LAST_INTEREST)
}

pub fn record_goal(store: &LocalStore, entry: GoalHistoryEntry) -> bool {
    push_bounded(store, KEY_GOAL_HISTORY, entry, HISTORY_LIMIT)
}

/// Saved goal projections, oldest first.
pub fn goal_history(store: &LocalStore) -> Vec<GoalHistoryEntry> {
    store.load(KEY_GOAL_HISTORY).unwrap_or_default()
}

pub fn record_analysis(store: &LocalStore, entry: AnalysisHistoryEntry) -> bool {
    push_bounded(store, KEY_ANALYSIS_HISTORY, entry, HISTORY_LIMIT)
}

/// Saved budget analyses, oldest first.
pub fn analysis_history(store: &LocalStore) -> Vec<AnalysisHistoryEntry> {
    store.load(KEY_ANALYSIS_HISTORY).unwrap_or_default()
}
