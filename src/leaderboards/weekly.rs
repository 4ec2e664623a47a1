//! Weekly leaderboard derived from daily best scores.
//!
//! Totals are summed over the current reset window (Monday to Monday); a
//! persisted marker gates the sweep that clears the window when a new week
//! begins.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::dates;
use crate::storage::store::RecordStore;
use crate::storage::substrate::{StorageError, Substrate};

/// Number of entries shown on the weekly leaderboard.
pub const RANKING_SIZE: usize = 5;

/// One leaderboard row: a user and their weekly total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRanking {
    pub user_id: String,
    pub user_name: String,
    pub total_correct_answers: u32,
}

/// Weekly leaderboard service.
pub struct WeeklyLeaderboard<S: Substrate> {
    store: Arc<RecordStore<S>>,
}

impl<S: Substrate> WeeklyLeaderboard<S> {
    /// Create a new leaderboard service over the record store.
    pub fn new(store: Arc<RecordStore<S>>) -> Self {
        Self { store }
    }

    /// Clear all daily bests once per calendar week.
    ///
    /// The sweep fires when the persisted marker differs from the Monday of
    /// the current week; a never-set marker counts as a stale week. Repeated
    /// calls within the same week are no-ops after the first.
    pub fn reset_sweep(&self) -> Result<(), StorageError> {
        let this_monday = dates::this_monday();
        let last_clear = self.store.last_clear_date()?;

        if last_clear.as_deref() != Some(this_monday.as_str()) {
            let cleared = self.store.clear_daily_bests()?;
            self.store.set_last_clear_date(&this_monday)?;
            tracing::info!(
                "weekly reset: cleared {} daily bests for week of {}",
                cleared,
                this_monday
            );
        }
        Ok(())
    }

    /// Top-5 ranking for the current week, sorted descending by total.
    ///
    /// Runs the reset sweep first, so every daily best that survives is
    /// within the current week. Ties break on ascending user id to keep the
    /// order deterministic. Daily bests whose user no longer exists are
    /// dropped.
    pub fn ranking(&self) -> Result<Vec<WeeklyRanking>, StorageError> {
        self.reset_sweep()?;

        let mut totals: HashMap<String, u32> = HashMap::new();
        for best in self.store.all_daily_bests()? {
            *totals.entry(best.user_id).or_insert(0) += best.best_score;
        }

        let users = self.store.get_users()?;
        let mut rankings: Vec<WeeklyRanking> = totals
            .into_iter()
            .filter_map(|(user_id, total)| {
                users.iter().find(|u| u.id == user_id).map(|user| WeeklyRanking {
                    user_id: user.id.clone(),
                    user_name: user.name.clone(),
                    total_correct_answers: total,
                })
            })
            .collect();

        rankings.sort_by(|a, b| {
            b.total_correct_answers
                .cmp(&a.total_correct_answers)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        rankings.truncate(RANKING_SIZE);

        Ok(rankings)
    }
}
