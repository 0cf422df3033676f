//! Onboarding of new members: starter quest assignment and mentorship.
//!
//! A member either gets a mentor or goes independent. Independent members have their
//! starter quests pushed to them as `assigned` progress and must finish them before any
//! ordinary quest unlocks; mentored members skip that gate entirely.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        quest::QuestRepository, quest_progress::QuestProgressRepository,
        welcome::WelcomeRepository,
    },
    error::AppError,
    model::welcome::WelcomeRecord,
};

/// Number of starter quest slots on a welcome record.
const STARTER_SLOTS: usize = 2;

pub struct WelcomeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WelcomeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a new membership period for a member.
    ///
    /// Picks the first two candidate starter quests that exist in the guild and are
    /// available, then creates or resets the welcome record. Mentorless members also get an
    /// `assigned` progress record per pick unless they already have one for that quest.
    ///
    /// # Arguments
    /// - `guild_id` - Guild joined
    /// - `user_id` - Joining member
    /// - `mentor_id` - Mentor paired at join, if any
    /// - `candidates` - Configured starter quest ids, in preference order
    ///
    /// # Returns
    /// - `Ok(WelcomeRecord)` - The member's onboarding record
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn enroll_member(
        &self,
        guild_id: u64,
        user_id: u64,
        mentor_id: Option<u64>,
        candidates: &[String],
    ) -> Result<WelcomeRecord, AppError> {
        let candidate_ids: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let quests = QuestRepository::new(self.db)
            .get_by_ids(&candidate_ids)
            .await?;

        let picks: Vec<String> = candidate_ids
            .iter()
            .filter(|id| {
                quests.iter().any(|quest| {
                    quest.quest_id == **id && quest.guild_id == guild_id && quest.is_available()
                })
            })
            .take(STARTER_SLOTS)
            .map(|id| id.to_string())
            .collect();

        let record = WelcomeRepository::new(self.db)
            .upsert(guild_id, user_id, mentor_id, &picks)
            .await?;

        if mentor_id.is_none() {
            let progress_repo = QuestProgressRepository::new(self.db);
            for quest_id in &picks {
                progress_repo
                    .insert_assigned(quest_id, user_id, guild_id)
                    .await?;
            }
        }

        tracing::info!(
            "Enrolled member {} in guild {} with starter quests {:?} ({})",
            user_id,
            guild_id,
            picks,
            if mentor_id.is_some() { "mentored" } else { "independent" }
        );

        Ok(record)
    }

    /// Pairs a member with a mentor.
    ///
    /// Mentored members no longer need starter quests, so any of their starter quest records
    /// that were not approved are removed.
    ///
    /// # Returns
    /// - `Ok(true)` - Mentor assigned
    /// - `Ok(false)` - Member has no welcome record
    pub async fn assign_mentor(
        &self,
        guild_id: u64,
        user_id: u64,
        mentor_id: u64,
    ) -> Result<bool, AppError> {
        let updated = WelcomeRepository::new(self.db)
            .set_mentor(guild_id, user_id, mentor_id)
            .await?;
        if !updated {
            return Ok(false);
        }

        let removed = QuestProgressRepository::new(self.db)
            .delete_starters_for_user(user_id, guild_id, true)
            .await?;

        tracing::info!(
            "Assigned mentor {} to member {} in guild {}, cleared {} starter records",
            mentor_id,
            user_id,
            guild_id,
            removed
        );

        Ok(true)
    }

    /// Flags an assigned starter quest as completed on the welcome record.
    ///
    /// # Returns
    /// - `Ok(true)` - The quest occupies one of the member's slots
    /// - `Ok(false)` - The quest is not assigned to the member
    pub async fn mark_starter_completed(
        &self,
        guild_id: u64,
        user_id: u64,
        quest_id: &str,
    ) -> Result<bool, AppError> {
        Ok(WelcomeRepository::new(self.db)
            .mark_starter_completed(guild_id, user_id, quest_id)
            .await?)
    }

    pub async fn get_record(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<WelcomeRecord>, AppError> {
        Ok(WelcomeRepository::new(self.db).get(guild_id, user_id).await?)
    }
}
