//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Discord
//! snowflakes stored as strings are parsed to `u64` there, and status/rank strings become
//! enums, so services never deal with raw column values.

pub mod leaderboard;
pub mod member;
pub mod progress;
pub mod quest;
pub mod welcome;
