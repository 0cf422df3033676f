//! Leaderboard factory for creating ledger entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ledger entries.
pub struct LeaderboardFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    username: String,
    display_name: String,
    points: i32,
    total_points_earned: i32,
}

impl<'a> LeaderboardFactory<'a> {
    /// Creates a new LeaderboardFactory with default values.
    ///
    /// Defaults:
    /// - username/display_name: `"member{id}"`
    /// - points: `0`, total_points_earned: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild of the entry
    /// - `user_id` - Member of the entry
    ///
    /// # Returns
    /// - `LeaderboardFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            username: format!("member{}", id),
            display_name: format!("member{}", id),
            points: 0,
            total_points_earned: 0,
        }
    }

    /// Sets the current balance.
    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Sets the lifetime earnings counter.
    pub fn total_points_earned(mut self, total: i32) -> Self {
        self.total_points_earned = total;
        self
    }

    /// Sets both username and display name.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.username = name.clone();
        self.display_name = name;
        self
    }

    /// Builds and inserts the ledger entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::leaderboard::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::leaderboard::Model, DbErr> {
        let now = Utc::now();
        entity::leaderboard::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            display_name: ActiveValue::Set(self.display_name),
            points: ActiveValue::Set(self.points),
            total_points_earned: ActiveValue::Set(self.total_points_earned),
            last_updated: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ledger entry holding the given balance.
pub async fn create_entry(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    user_id: impl Into<String>,
    points: i32,
) -> Result<entity::leaderboard::Model, DbErr> {
    LeaderboardFactory::new(db, guild_id, user_id)
        .points(points)
        .build()
        .await
}
