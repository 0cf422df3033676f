//! SeaORM entity models for the questboard schema.
//!
//! One module per table. Discord snowflakes are stored as strings and parsed at the
//! repository boundary; array-valued columns are stored as JSON arrays.

pub mod prelude;

pub mod departed_member;
pub mod leaderboard;
pub mod quest;
pub mod quest_progress;
pub mod welcome_automation;
