//! Departed member factory for creating departure history.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departure rows.
pub struct DepartedMemberFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    member_id: String,
    username: String,
    leave_date: DateTime<Utc>,
    total_points: i32,
    times_left: i32,
}

impl<'a> DepartedMemberFactory<'a> {
    /// Creates a new DepartedMemberFactory.
    ///
    /// Defaults:
    /// - leave_date: now
    /// - total_points: `0`
    /// - times_left: `1`
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        member_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            member_id: member_id.into(),
            username: format!("departed{}", next_id()),
            leave_date: Utc::now(),
            total_points: 0,
            times_left: 1,
        }
    }

    /// Sets when the member left.
    pub fn leave_date(mut self, leave_date: DateTime<Utc>) -> Self {
        self.leave_date = leave_date;
        self
    }

    /// Sets the points snapshot taken at departure.
    pub fn total_points(mut self, total_points: i32) -> Self {
        self.total_points = total_points;
        self
    }

    /// Sets the departure counter.
    pub fn times_left(mut self, times_left: i32) -> Self {
        self.times_left = times_left;
        self
    }

    /// Builds and inserts the departure row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::departed_member::Model)` - Created departure
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::departed_member::Model, DbErr> {
        entity::departed_member::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            guild_id: ActiveValue::Set(self.guild_id),
            leave_date: ActiveValue::Set(self.leave_date),
            username: ActiveValue::Set(self.username.clone()),
            display_name: ActiveValue::Set(self.username),
            highest_role: ActiveValue::Set(None),
            total_points: ActiveValue::Set(self.total_points),
            join_date: ActiveValue::Set(None),
            times_left: ActiveValue::Set(self.times_left),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a departure row dated at `leave_date`.
pub async fn create_departure(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    member_id: impl Into<String>,
    leave_date: DateTime<Utc>,
) -> Result<entity::departed_member::Model, DbErr> {
    DepartedMemberFactory::new(db, guild_id, member_id)
        .leave_date(leave_date)
        .build()
        .await
}
