//! MathSprint - arithmetic practice game core
//!
//! Local persistence and aggregation layer for a single-player timed
//! arithmetic practice game. Stores player profiles and completed practice
//! sessions, maintains per-day best scores incrementally, and derives a
//! rolling weekly leaderboard that resets on Monday boundaries.

pub mod game;
pub mod leaderboards;
pub mod storage;

// Re-export commonly used types
pub use game::problems::{generate_problem, ProblemError};
pub use game::types::{DailyBestScore, DifficultySettings, GameSession, Operation, Problem, User};
pub use leaderboards::weekly::{WeeklyLeaderboard, WeeklyRanking};
pub use storage::store::RecordStore;
pub use storage::substrate::{SqliteSubstrate, StorageError, Substrate};
