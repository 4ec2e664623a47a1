//! Core game records and difficulty configuration.
//!
//! Persisted records serialize as camelCase JSON, matching the layout of
//! data files written by earlier versions of the game.

use serde::{Deserialize, Serialize};

/// Arithmetic operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Symbol used when rendering a problem.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Difficulty configuration chosen by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultySettings {
    /// Operations the generator may pick from; never empty in a valid config
    pub operations: Vec<Operation>,
    /// Operand digit count (1-3)
    pub max_digits: u32,
    /// Round length in minutes (1-5)
    pub play_time: u32,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            operations: vec![Operation::Addition],
            max_digits: 2,
            play_time: 2,
        }
    }
}

/// Player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Display name; length limits are enforced by the UI, not re-checked here
    pub name: String,
    /// Current difficulty configuration
    pub settings: DifficultySettings,
    /// Creation timestamp, epoch milliseconds
    pub created_at: i64,
}

/// Immutable record of one completed timed practice run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Unique identifier, supplied by the caller per run
    pub id: String,
    /// Owning user; an orphaned session is tolerated rather than rejected
    pub user_id: String,
    /// Completion timestamp, epoch milliseconds
    pub date: i64,
    pub correct_answers: u32,
    pub total_problems: u32,
    /// Difficulty snapshot active when the session ran
    pub settings: DifficultySettings,
}

/// Best score for one user on one civil date.
///
/// Derived from sessions and maintained incrementally: `best_score` only
/// ever increases within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBestScore {
    pub user_id: String,
    /// Civil date in YYYY-MM-DD form, local time zone
    pub date: String,
    pub best_score: u32,
    /// Session that set the current best
    pub session_id: String,
}

/// A generated practice problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub numbers: Vec<i64>,
    pub operation: Operation,
    pub correct_answer: i64,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(&format!(" {} ", self.operation.symbol()));
        write!(f, "{}", rendered)
    }
}
