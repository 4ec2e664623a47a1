//! Weekly leaderboard aggregation.

pub mod weekly;

pub use weekly::{WeeklyLeaderboard, WeeklyRanking, RANKING_SIZE};
