//! Game domain: record types and problem generation.

pub mod problems;
pub mod types;

pub use problems::{generate_problem, ProblemError};
pub use types::{DailyBestScore, DifficultySettings, GameSession, Operation, Problem, User};
