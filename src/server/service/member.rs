use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{departed_member::DepartedMemberRepository, leaderboard::LeaderboardRepository},
    error::AppError,
    model::member::{DepartedMember, RecordDepartureParams},
};

/// Service tracking members leaving and rejoining a guild.
///
/// Departure rows delimit membership periods, which decide whether old starter quest
/// outcomes still count against a member.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a member leaving the guild.
    ///
    /// Snapshots the member's balance into a new departure row, then removes their
    /// leaderboard entry.
    ///
    /// # Returns
    /// - `Ok(DepartedMember)` - The new departure row, `times_left` counting this departure
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn record_departure(
        &self,
        params: RecordDepartureParams,
    ) -> Result<DepartedMember, AppError> {
        let ledger = LeaderboardRepository::new(self.db);
        let departures = DepartedMemberRepository::new(self.db);

        let guild_id = params.guild_id;
        let member_id = params.member_id;

        let total_points = ledger
            .get(guild_id, member_id)
            .await?
            .map(|entry| entry.points)
            .unwrap_or(0);
        let times_left = departures
            .get_latest(guild_id, member_id)
            .await?
            .map(|previous| previous.times_left)
            .unwrap_or(0)
            + 1;

        let departure = departures
            .create(params, total_points, times_left, Utc::now())
            .await?;
        ledger.remove(guild_id, member_id).await?;

        tracing::info!(
            "Member {} left guild {} with {} points (departure #{})",
            member_id,
            guild_id,
            total_points,
            times_left
        );

        Ok(departure)
    }

    /// Gets the member's most recent departure from a guild.
    pub async fn latest_departure(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<DepartedMember>, AppError> {
        Ok(DepartedMemberRepository::new(self.db)
            .get_latest(guild_id, member_id)
            .await?)
    }

    /// Records a departed member rejoining by bumping their latest departure counter.
    ///
    /// # Returns
    /// - `Ok(true)` - The member had a departure and it was updated
    /// - `Ok(false)` - The member never left this guild
    pub async fn record_return(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError> {
        let repo = DepartedMemberRepository::new(self.db);

        let Some(latest) = repo.get_latest(guild_id, member_id).await? else {
            return Ok(false);
        };

        let updated = repo
            .increment_times_left(guild_id, member_id, latest.leave_date)
            .await?;

        if updated {
            tracing::info!("Member {} rejoined guild {}", member_id, guild_id);
        }

        Ok(updated)
    }
}
