use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{leaderboard::LedgerEntry, member::MemberProfile};

pub struct LeaderboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the member's entry with a zero balance, or refreshes its cached names.
    ///
    /// The balance of an existing entry is never touched.
    pub async fn upsert_member(
        &self,
        guild_id: u64,
        user_id: u64,
        profile: &MemberProfile,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::Leaderboard::insert(entity::leaderboard::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            username: ActiveValue::Set(profile.username.clone()),
            display_name: ActiveValue::Set(profile.display_name.clone()),
            points: ActiveValue::Set(0),
            total_points_earned: ActiveValue::Set(0),
            last_updated: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::leaderboard::Column::GuildId,
                entity::leaderboard::Column::UserId,
            ])
            .update_columns([
                entity::leaderboard::Column::Username,
                entity::leaderboard::Column::DisplayName,
                entity::leaderboard::Column::LastUpdated,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Adds `delta` to a member's balance, keeping the result within `0..=i32::MAX`.
    ///
    /// Ensures the entry exists first, then applies the clamp as a single UPDATE so
    /// concurrent adjustments never read-modify-write the balance client side.
    ///
    /// # Arguments
    /// - `guild_id` - Guild of the entry
    /// - `user_id` - Member of the entry
    /// - `delta` - Signed amount to add
    /// - `profile` - Names refreshed on the entry
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - Entry after the adjustment
    /// - `Err(DbErr)` - Database error
    pub async fn adjust_points(
        &self,
        guild_id: u64,
        user_id: u64,
        delta: i32,
        profile: &MemberProfile,
    ) -> Result<LedgerEntry, DbErr> {
        self.upsert_member(guild_id, user_id, profile).await?;

        let delta = i64::from(delta);
        let max = i64::from(i32::MAX);

        // summed as BIGINT so the bounds are checked before narrowing back to the column
        entity::prelude::Leaderboard::update_many()
            .col_expr(
                entity::leaderboard::Column::Points,
                Expr::cust_with_values(
                    r#"CASE WHEN CAST("points" AS BIGINT) + ? < 0 THEN 0 WHEN CAST("points" AS BIGINT) + ? > ? THEN ? ELSE CAST("points" AS BIGINT) + ? END"#,
                    [delta, delta, max, max, delta],
                ),
            )
            .col_expr(
                entity::leaderboard::Column::LastUpdated,
                Expr::value(Utc::now()),
            )
            .filter(entity::leaderboard::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::leaderboard::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        self.get(guild_id, user_id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Leaderboard entry for user {} in guild {} not found after adjustment",
            user_id, guild_id
        )))
    }

    /// Overwrites a member's balance, creating the entry if needed.
    ///
    /// Negative values are stored as zero.
    pub async fn set_points(
        &self,
        guild_id: u64,
        user_id: u64,
        points: i32,
        profile: &MemberProfile,
    ) -> Result<LedgerEntry, DbErr> {
        let now = Utc::now();

        entity::prelude::Leaderboard::insert(entity::leaderboard::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            username: ActiveValue::Set(profile.username.clone()),
            display_name: ActiveValue::Set(profile.display_name.clone()),
            points: ActiveValue::Set(points.max(0)),
            total_points_earned: ActiveValue::Set(0),
            last_updated: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::leaderboard::Column::GuildId,
                entity::leaderboard::Column::UserId,
            ])
            .update_columns([
                entity::leaderboard::Column::Username,
                entity::leaderboard::Column::DisplayName,
                entity::leaderboard::Column::Points,
                entity::leaderboard::Column::LastUpdated,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.get(guild_id, user_id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Leaderboard entry for user {} in guild {} not found after update",
            user_id, guild_id
        )))
    }

    /// Gets a member's entry.
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Result<Option<LedgerEntry>, DbErr> {
        entity::prelude::Leaderboard::find_by_id((guild_id.to_string(), user_id.to_string()))
            .one(self.db)
            .await?
            .map(LedgerEntry::from_entity)
            .transpose()
    }

    /// Deletes a member's entry.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No entry existed
    pub async fn remove(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Leaderboard::delete_by_id((
            guild_id.to_string(),
            user_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of a guild's entries, highest balance first, ties by user id.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to list
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Entries per page
    ///
    /// # Returns
    /// - `Ok((Vec<LedgerEntry>, u64))` - Entries on the page and total entry count
    /// - `Err(DbErr)` - Database error
    pub async fn get_page(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<LedgerEntry>, u64), DbErr> {
        let paginator = entity::prelude::Leaderboard::find()
            .filter(entity::leaderboard::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::leaderboard::Column::Points)
            .order_by_asc(entity::leaderboard::Column::UserId)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entries = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(LedgerEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }

    /// Counts entries in a guild with a balance strictly above `points`.
    pub async fn count_above(&self, guild_id: u64, points: i32) -> Result<u64, DbErr> {
        entity::prelude::Leaderboard::find()
            .filter(entity::leaderboard::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::leaderboard::Column::Points.gt(points))
            .count(self.db)
            .await
    }
}
