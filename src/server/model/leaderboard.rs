//! Domain models for the points ledger.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::util::parse::parse_snowflake;

/// A member's balance in one guild. `points` is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub guild_id: u64,
    pub user_id: u64,
    pub username: String,
    pub display_name: String,
    pub points: i32,
    /// Lifetime earnings counter. Best-effort only; adjustments do not maintain it.
    pub total_points_earned: i32,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Converts an entity model to a ledger entry at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - The converted entry
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id or user_id
    pub fn from_entity(entity: entity::leaderboard::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            user_id: parse_snowflake("user_id", &entity.user_id)?,
            username: entity.username,
            display_name: entity.display_name,
            points: entity.points,
            total_points_earned: entity.total_points_earned,
            last_updated: entity.last_updated,
            created_at: entity.created_at,
        })
    }
}

/// One page of a guild leaderboard, highest balance first.
#[derive(Debug, Clone)]
pub struct LeaderboardPage {
    pub entries: Vec<LedgerEntry>,
    pub total: u64,
    /// Page number (0-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
