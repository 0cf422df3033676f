use sea_orm::DatabaseConnection;

use crate::server::{
    data::leaderboard::LeaderboardRepository,
    error::AppError,
    model::{
        leaderboard::{LeaderboardPage, LedgerEntry},
        member::MemberProfile,
    },
};

/// Service for the per-guild points ledger.
///
/// Balances never go negative. Adjustments are applied as a single clamped UPDATE, so
/// concurrent grants to the same member each apply exactly once.
pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a signed amount to a member's balance, flooring at zero.
    ///
    /// Creates the entry with a zero balance first if the member has none.
    ///
    /// # Arguments
    /// - `guild_id` - Guild of the ledger
    /// - `user_id` - Member to adjust
    /// - `delta` - Points to add; negative to deduct
    /// - `profile` - Names cached on the entry
    ///
    /// # Returns
    /// - `Ok(LedgerEntry)` - Entry with `previous + delta` clamped to `0..=i32::MAX`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn adjust_points(
        &self,
        guild_id: u64,
        user_id: u64,
        delta: i32,
        profile: &MemberProfile,
    ) -> Result<LedgerEntry, AppError> {
        let entry = LeaderboardRepository::new(self.db)
            .adjust_points(guild_id, user_id, delta, profile)
            .await?;

        tracing::debug!(
            "Adjusted points of user {} in guild {} by {} (now {})",
            user_id,
            guild_id,
            delta,
            entry.points
        );

        Ok(entry)
    }

    /// Overwrites a member's balance. Intended for bulk import only.
    ///
    /// Negative values are stored as zero.
    pub async fn set_exact_points(
        &self,
        guild_id: u64,
        user_id: u64,
        points: i32,
        profile: &MemberProfile,
    ) -> Result<LedgerEntry, AppError> {
        let entry = LeaderboardRepository::new(self.db)
            .set_points(guild_id, user_id, points, profile)
            .await?;

        tracing::info!(
            "Set points of user {} in guild {} to {}",
            user_id,
            guild_id,
            entry.points
        );

        Ok(entry)
    }

    /// Ensures a member has an entry, refreshing cached names but keeping the balance.
    pub async fn add_member(
        &self,
        guild_id: u64,
        user_id: u64,
        profile: &MemberProfile,
    ) -> Result<(), AppError> {
        LeaderboardRepository::new(self.db)
            .upsert_member(guild_id, user_id, profile)
            .await?;

        Ok(())
    }

    /// Deletes a member's entry.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - Member had no entry
    pub async fn remove_member(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        Ok(LeaderboardRepository::new(self.db)
            .remove(guild_id, user_id)
            .await?)
    }

    pub async fn get_entry(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<LedgerEntry>, AppError> {
        Ok(LeaderboardRepository::new(self.db)
            .get(guild_id, user_id)
            .await?)
    }

    /// Gets one page of a guild's leaderboard.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to list
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Entries per page; zero is treated as one
    ///
    /// # Returns
    /// - `Ok(LeaderboardPage)` - Entries, highest balance first, with paging totals
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_leaderboard(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<LeaderboardPage, AppError> {
        let per_page = per_page.max(1);
        let (entries, total) = LeaderboardRepository::new(self.db)
            .get_page(guild_id, page, per_page)
            .await?;

        Ok(LeaderboardPage {
            entries,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Gets a member's 1-based rank; tied balances share a rank.
    ///
    /// # Returns
    /// - `Ok(Some(rank))` - One plus the number of members with a strictly higher balance
    /// - `Ok(None)` - Member has no entry
    pub async fn get_rank(&self, guild_id: u64, user_id: u64) -> Result<Option<u64>, AppError> {
        let repo = LeaderboardRepository::new(self.db);

        let Some(entry) = repo.get(guild_id, user_id).await? else {
            return Ok(None);
        };

        let above = repo.count_above(guild_id, entry.points).await?;

        Ok(Some(above + 1))
    }
}
