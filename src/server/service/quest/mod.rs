//! Quest catalog and lifecycle orchestration.
//!
//! `QuestService` owns the accept/complete/approve/reject state machine. Not-found and
//! invalid transitions are reported as `Ok(None)`, eligibility denials as
//! `AcceptOutcome::Denied`, and only storage failures as `Err`.

pub mod eligibility;

use chrono::{DateTime, Utc};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        departed_member::DepartedMemberRepository, quest::QuestRepository,
        quest_progress::QuestProgressRepository, welcome::WelcomeRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        progress::{ProgressStatus, QuestProgress, QuestWithProgress, SubmitProofParams},
        quest::{CreateQuestParams, PurgeSummary, Quest, QuestStatus, QUEST_ID_LENGTH},
    },
};

pub use eligibility::AcceptDenial;
use eligibility::{check_eligibility, EligibilityFacts};

/// Attempts at drawing an unused random quest id before giving up.
const MAX_ID_ATTEMPTS: usize = 5;

/// Result of an accept request that reached a decision.
#[derive(Debug, Clone, PartialEq)]
pub enum AcceptOutcome {
    /// The member now holds an `accepted` record.
    Accepted(QuestProgress),
    /// A business rule refused the request; show the reason to the member.
    Denied(AcceptDenial),
}

pub struct QuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a quest, generating an 8 character id unless one is supplied.
    ///
    /// # Arguments
    /// - `params` - Quest fields; `quest_id` set only when seeding reserved quests
    ///
    /// # Returns
    /// - `Ok(Quest)` - The created quest, `available`
    /// - `Err(AppError::DbErr)` - Insert failed
    /// - `Err(AppError::InternalErr)` - No unused id could be drawn
    pub async fn create_quest(&self, params: CreateQuestParams) -> Result<Quest, AppError> {
        let repo = QuestRepository::new(self.db);

        let quest_id = match params.quest_id.clone() {
            Some(quest_id) => quest_id,
            None => self.generate_quest_id(&repo).await?,
        };

        let quest = repo.create(quest_id, params).await?;

        tracing::info!(
            "Created quest {} ({}) in guild {}",
            quest.quest_id,
            quest.title,
            quest.guild_id
        );

        Ok(quest)
    }

    /// Gets a quest by id.
    pub async fn get_quest(&self, quest_id: &str) -> Result<Option<Quest>, AppError> {
        Ok(QuestRepository::new(self.db).get_by_id(quest_id).await?)
    }

    /// Saves edits to a quest's editable fields.
    ///
    /// # Returns
    /// - `Ok(true)` - Quest updated
    /// - `Ok(false)` - Quest not found
    pub async fn update_quest(&self, quest: &Quest) -> Result<bool, AppError> {
        Ok(QuestRepository::new(self.db).update(quest).await?)
    }

    /// Gets the quests of a guild that can currently be accepted, newest first.
    pub async fn get_available_quests(&self, guild_id: u64) -> Result<Vec<Quest>, AppError> {
        Ok(QuestRepository::new(self.db)
            .get_by_guild(guild_id, Some(QuestStatus::Available))
            .await?)
    }

    /// Gets every quest of a guild, newest first.
    pub async fn get_guild_quests(&self, guild_id: u64) -> Result<Vec<Quest>, AppError> {
        Ok(QuestRepository::new(self.db)
            .get_by_guild(guild_id, None)
            .await?)
    }

    /// Deletes a quest and every progress record for it. Irrecoverable.
    ///
    /// # Returns
    /// - `Ok(true)` - Quest deleted
    /// - `Ok(false)` - Quest not found
    pub async fn delete_quest(&self, quest_id: &str) -> Result<bool, AppError> {
        let deleted = QuestRepository::new(self.db).delete(quest_id).await?;

        if deleted {
            tracing::info!("Deleted quest {}", quest_id);
        }

        Ok(deleted)
    }

    /// Deletes every quest and progress record of a guild.
    pub async fn purge_guild_quests(&self, guild_id: u64) -> Result<PurgeSummary, AppError> {
        let summary = QuestRepository::new(self.db).purge_guild(guild_id).await?;

        tracing::info!(
            "Purged {} quests and {} progress records from guild {}",
            summary.quests_deleted,
            summary.progress_deleted,
            guild_id
        );

        Ok(summary)
    }

    /// Accepts a quest for a member at the current time.
    ///
    /// See `accept_quest_at`.
    pub async fn accept_quest(
        &self,
        quest_id: &str,
        user_id: u64,
        user_role_ids: &[u64],
        channel_id: Option<u64>,
    ) -> Result<AcceptOutcome, AppError> {
        self.accept_quest_at(quest_id, user_id, user_role_ids, channel_id, Utc::now())
            .await
    }

    /// Accepts a quest for a member if every eligibility rule passes.
    ///
    /// A first attempt inserts a new record; a retry or repeat resets the existing record to
    /// `accepted`. Either write is conditional, so when two requests race only one is
    /// accepted and the other is denied as already accepted.
    ///
    /// # Arguments
    /// - `quest_id` - Quest to accept
    /// - `user_id` - Accepting member
    /// - `user_role_ids` - The member's current roles in the quest's guild
    /// - `channel_id` - Channel the request came from
    /// - `now` - Decision and acceptance time
    ///
    /// # Returns
    /// - `Ok(AcceptOutcome::Accepted)` - Record created or reset
    /// - `Ok(AcceptOutcome::Denied)` - A rule refused the request
    /// - `Err(AppError)` - Storage failure
    pub async fn accept_quest_at(
        &self,
        quest_id: &str,
        user_id: u64,
        user_role_ids: &[u64],
        channel_id: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<AcceptOutcome, AppError> {
        let quest_repo = QuestRepository::new(self.db);
        let progress_repo = QuestProgressRepository::new(self.db);

        let Some(quest) = quest_repo.get_by_id(quest_id).await? else {
            return Ok(AcceptOutcome::Denied(AcceptDenial::NotFound));
        };
        let existing = progress_repo.get(quest_id, user_id).await?;

        let latest_leave = if quest.is_starter() {
            DepartedMemberRepository::new(self.db)
                .get_latest(quest.guild_id, user_id)
                .await?
                .map(|departure| departure.leave_date)
        } else {
            None
        };

        let (welcome, starter_progress) = if quest.is_starter() {
            (None, Vec::new())
        } else {
            let welcome = WelcomeRepository::new(self.db)
                .get(quest.guild_id, user_id)
                .await?;
            let starter_progress = match &welcome {
                Some(record) => {
                    progress_repo
                        .get_for_quests(user_id, &record.starter_quests())
                        .await?
                }
                None => Vec::new(),
            };
            (welcome, starter_progress)
        };

        let facts = EligibilityFacts {
            quest: Some(&quest),
            existing: existing.as_ref(),
            latest_leave,
            user_role_ids,
            welcome: welcome.as_ref(),
            starter_progress: &starter_progress,
        };

        if let Err(denial) = check_eligibility(&facts, now) {
            tracing::debug!(
                "User {} denied quest {}: {}",
                user_id,
                quest_id,
                denial
            );
            return Ok(AcceptOutcome::Denied(denial));
        }

        let accepted = match &existing {
            None => {
                progress_repo
                    .insert_accepted(&quest, user_id, channel_id, now)
                    .await?
            }
            Some(previous) => {
                progress_repo
                    .restart(quest_id, user_id, previous.status, channel_id, now)
                    .await?
            }
        };

        match accepted {
            Some(progress) => {
                tracing::info!("User {} accepted quest {}", user_id, quest_id);
                Ok(AcceptOutcome::Accepted(progress))
            }
            None => Ok(AcceptOutcome::Denied(AcceptDenial::AlreadyAccepted)),
        }
    }

    /// Submits proof for an assigned or accepted quest, moving it to `completed`.
    ///
    /// Assigned quests get `accepted_at` backfilled so no completion lacks an acceptance time.
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Submission recorded
    /// - `Ok(None)` - No record, or nothing to submit from its current status
    pub async fn complete_quest(
        &self,
        quest_id: &str,
        user_id: u64,
        proof: SubmitProofParams,
    ) -> Result<Option<QuestProgress>, AppError> {
        let repo = QuestProgressRepository::new(self.db);
        let now = Utc::now();

        let Some(existing) = repo.get(quest_id, user_id).await? else {
            return Ok(None);
        };
        if !existing.status.can_submit() {
            return Ok(None);
        }

        let accepted_at = existing.accepted_at.unwrap_or(now);
        let completed = repo
            .complete(quest_id, user_id, existing.status, accepted_at, proof, now)
            .await?;

        if completed.is_some() {
            tracing::info!("User {} submitted proof for quest {}", user_id, quest_id);
        }

        Ok(completed)
    }

    /// Approves a completed submission.
    ///
    /// Does not award points; see `RewardService::approve_and_award`.
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Submission approved
    /// - `Ok(None)` - No record, or the record is not `completed`
    pub async fn approve_quest(
        &self,
        quest_id: &str,
        user_id: u64,
        approver_id: u64,
    ) -> Result<Option<QuestProgress>, AppError> {
        let approved = QuestProgressRepository::new(self.db)
            .review(
                quest_id,
                user_id,
                ProgressStatus::Approved,
                format!("Approved by {}", approver_id),
                Utc::now(),
            )
            .await?;

        if approved.is_some() {
            tracing::info!(
                "Quest {} for user {} approved by {}",
                quest_id,
                user_id,
                approver_id
            );
        }

        Ok(approved)
    }

    /// Rejects a completed submission, recording the reason in the audit note.
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Submission rejected
    /// - `Ok(None)` - No record, or the record is not `completed`
    pub async fn reject_quest(
        &self,
        quest_id: &str,
        user_id: u64,
        approver_id: u64,
        reason: &str,
    ) -> Result<Option<QuestProgress>, AppError> {
        let rejected = QuestProgressRepository::new(self.db)
            .review(
                quest_id,
                user_id,
                ProgressStatus::Rejected,
                format!("Rejected by {}: {}", approver_id, reason),
                Utc::now(),
            )
            .await?;

        if rejected.is_some() {
            tracing::info!(
                "Quest {} for user {} rejected by {}",
                quest_id,
                user_id,
                approver_id
            );
        }

        Ok(rejected)
    }

    /// Gets a member's record for a quest.
    pub async fn get_progress(
        &self,
        quest_id: &str,
        user_id: u64,
    ) -> Result<Option<QuestProgress>, AppError> {
        Ok(QuestProgressRepository::new(self.db)
            .get(quest_id, user_id)
            .await?)
    }

    /// Lists a member's quests in a guild, most recently accepted first.
    ///
    /// Without a status filter, assigned starter quests that have no record yet and are
    /// still available are appended as unsaved `assigned` entries.
    pub async fn get_user_quests(
        &self,
        user_id: u64,
        guild_id: u64,
        status: Option<ProgressStatus>,
    ) -> Result<Vec<QuestWithProgress>, AppError> {
        let mut quests = QuestProgressRepository::new(self.db)
            .get_for_user(user_id, guild_id, status)
            .await?;

        if status.is_some() {
            return Ok(quests);
        }

        let Some(welcome) = WelcomeRepository::new(self.db)
            .get(guild_id, user_id)
            .await?
        else {
            return Ok(quests);
        };

        let missing: Vec<&str> = welcome
            .starter_quests()
            .into_iter()
            .filter(|id| !quests.iter().any(|q| q.quest.quest_id == *id))
            .collect();

        let mut starters = QuestRepository::new(self.db).get_by_ids(&missing).await?;
        starters.sort_by_key(|quest| missing.iter().position(|id| *id == quest.quest_id));

        for quest in starters.into_iter().filter(Quest::is_available) {
            let progress = QuestProgress::synthetic_assignment(&quest, user_id);
            quests.push(QuestWithProgress { quest, progress });
        }

        Ok(quests)
    }

    /// Lists submissions awaiting review in a guild, oldest first.
    pub async fn get_pending_approvals(
        &self,
        guild_id: u64,
    ) -> Result<Vec<QuestWithProgress>, AppError> {
        Ok(QuestProgressRepository::new(self.db)
            .get_pending_approvals(guild_id)
            .await?)
    }

    async fn generate_quest_id(&self, repo: &QuestRepository<'_>) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = random_quest_id();
            if repo.get_by_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(InternalError::QuestIdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        }
        .into())
    }
}

/// Draws a random lowercase alphanumeric quest id.
fn random_quest_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(QUEST_ID_LENGTH)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect()
}
