//! Typed record accessors over the key-value substrate.
//!
//! Owns the key-naming and prefix-filtering conventions for the three
//! entity kinds (User, GameSession, DailyBestScore) and the singleton
//! reset marker.

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::game::types::{DailyBestScore, DifficultySettings, GameSession, User};
use crate::storage::dates;
use crate::storage::substrate::{StorageError, Substrate};

const USER_PREFIX: &str = "user_";
const SESSION_PREFIX: &str = "session_";
const DAILY_BEST_PREFIX: &str = "daily_best_";
const LAST_CLEAR_KEY: &str = "last_clear_date";

fn daily_best_key(user_id: &str, date: &str) -> String {
    format!("{}{}_{}", DAILY_BEST_PREFIX, user_id, date)
}

/// Durable CRUD for users and sessions, plus incremental maintenance of
/// per-day best scores.
pub struct RecordStore<S: Substrate> {
    substrate: S,
}

impl<S: Substrate> RecordStore<S> {
    /// Create a record store over the given substrate.
    pub fn new(substrate: S) -> Self {
        Self { substrate }
    }

    /// Get a reference to the underlying substrate.
    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.substrate.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, record: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.substrate.set(key, &raw)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .substrate
            .list_keys()?
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }

    // ========== User CRUD ==========

    /// Create a user with a fresh id and default difficulty settings.
    pub fn create_user(&self, name: &str) -> Result<User, StorageError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            settings: DifficultySettings::default(),
            created_at: dates::now_millis(),
        };

        self.save(&format!("{}{}", USER_PREFIX, user.id), &user)?;
        tracing::debug!("created user {} ({})", user.name, user.id);
        Ok(user)
    }

    /// List all users. Order is unspecified; callers needing a stable
    /// order must sort explicitly.
    pub fn get_users(&self) -> Result<Vec<User>, StorageError> {
        let mut users = Vec::new();
        for key in self.keys_with_prefix(USER_PREFIX)? {
            if let Some(user) = self.load::<User>(&key)? {
                users.push(user);
            }
        }
        Ok(users)
    }

    /// Replace a user's difficulty settings. A missing user is a silent
    /// no-op; callers are expected to have checked existence first.
    pub fn update_settings(
        &self,
        user_id: &str,
        settings: DifficultySettings,
    ) -> Result<(), StorageError> {
        let key = format!("{}{}", USER_PREFIX, user_id);
        if let Some(mut user) = self.load::<User>(&key)? {
            user.settings = settings;
            self.save(&key, &user)?;
        }
        Ok(())
    }

    /// Delete a user and cascade to their sessions and daily bests.
    ///
    /// Each deletion is independent; a failure partway can leave orphaned
    /// records behind, which the read paths tolerate.
    pub fn delete_user(&self, user_id: &str) -> Result<(), StorageError> {
        self.substrate
            .delete(&format!("{}{}", USER_PREFIX, user_id))?;

        for key in self.keys_with_prefix(SESSION_PREFIX)? {
            if let Some(session) = self.load::<GameSession>(&key)? {
                if session.user_id == user_id {
                    self.substrate.delete(&key)?;
                }
            }
        }

        let best_prefix = format!("{}{}_", DAILY_BEST_PREFIX, user_id);
        for key in self.keys_with_prefix(&best_prefix)? {
            self.substrate.delete(&key)?;
        }

        tracing::debug!("deleted user {} and owned records", user_id);
        Ok(())
    }

    // ========== Sessions and daily bests ==========

    /// Persist a completed session and fold it into the daily best for
    /// that user and day.
    ///
    /// The session write and the daily-best upsert are sequential, not
    /// atomic: a crash in between leaves the session recorded but the
    /// aggregate under-reporting it.
    pub fn save_session(&self, session: &GameSession) -> Result<(), StorageError> {
        self.save(&format!("{}{}", SESSION_PREFIX, session.id), session)?;

        let day = dates::civil_date_of(session.date);
        let key = daily_best_key(&session.user_id, &day);
        let existing = self.load::<DailyBestScore>(&key)?;

        let improved = existing
            .as_ref()
            .map_or(true, |best| session.correct_answers > best.best_score);
        if improved {
            let best = DailyBestScore {
                user_id: session.user_id.clone(),
                date: day,
                best_score: session.correct_answers,
                session_id: session.id.clone(),
            };
            self.save(&key, &best)?;
            tracing::debug!(
                "daily best for user {} on {} is now {}",
                best.user_id,
                best.date,
                best.best_score
            );
        }
        Ok(())
    }

    /// Today's best score for a user, or 0 when no session ran today.
    pub fn todays_best_score(&self, user_id: &str) -> Result<u32, StorageError> {
        let key = daily_best_key(user_id, &dates::today());
        Ok(self
            .load::<DailyBestScore>(&key)?
            .map_or(0, |best| best.best_score))
    }

    /// All current daily-best records.
    pub fn all_daily_bests(&self) -> Result<Vec<DailyBestScore>, StorageError> {
        let mut bests = Vec::new();
        for key in self.keys_with_prefix(DAILY_BEST_PREFIX)? {
            if let Some(best) = self.load::<DailyBestScore>(&key)? {
                bests.push(best);
            }
        }
        Ok(bests)
    }

    /// Delete every daily-best record, returning how many were removed.
    pub fn clear_daily_bests(&self) -> Result<usize, StorageError> {
        let keys = self.keys_with_prefix(DAILY_BEST_PREFIX)?;
        let count = keys.len();
        for key in keys {
            self.substrate.delete(&key)?;
        }
        Ok(count)
    }

    // ========== Reset marker ==========

    /// Date of the Monday that last triggered a leaderboard sweep.
    pub fn last_clear_date(&self) -> Result<Option<String>, StorageError> {
        self.load::<String>(LAST_CLEAR_KEY)
    }

    /// Record the Monday that triggered the current sweep.
    pub fn set_last_clear_date(&self, date: &str) -> Result<(), StorageError> {
        self.save(LAST_CLEAR_KEY, &date)
    }
}
