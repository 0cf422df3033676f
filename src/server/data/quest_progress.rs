use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::server::model::{
    progress::{ProgressStatus, QuestProgress, QuestWithProgress, SubmitProofParams},
    quest::{Quest, STARTER_QUEST_PREFIX},
};

pub struct QuestProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestProgressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the progress record of a member on a quest.
    pub async fn get(&self, quest_id: &str, user_id: u64) -> Result<Option<QuestProgress>, DbErr> {
        entity::prelude::QuestProgress::find_by_id((quest_id.to_string(), user_id.to_string()))
            .one(self.db)
            .await?
            .map(QuestProgress::from_entity)
            .transpose()
    }

    /// Gets a member's progress records for the given quests.
    pub async fn get_for_quests(
        &self,
        user_id: u64,
        quest_ids: &[&str],
    ) -> Result<Vec<QuestProgress>, DbErr> {
        if quest_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::QuestProgress::find()
            .filter(entity::quest_progress::Column::UserId.eq(user_id.to_string()))
            .filter(entity::quest_progress::Column::QuestId.is_in(quest_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(QuestProgress::from_entity)
            .collect()
    }

    /// Gets a member's quests in a guild with their progress, most recently accepted first.
    ///
    /// # Arguments
    /// - `user_id` - Member whose progress to list
    /// - `guild_id` - Guild to restrict to
    /// - `status` - Optional progress status filter
    ///
    /// # Returns
    /// - `Ok(Vec<QuestWithProgress>)` - Progress rows joined with their quest
    /// - `Err(DbErr)` - Database error or unparseable row
    pub async fn get_for_user(
        &self,
        user_id: u64,
        guild_id: u64,
        status: Option<ProgressStatus>,
    ) -> Result<Vec<QuestWithProgress>, DbErr> {
        let mut query = entity::prelude::QuestProgress::find()
            .filter(entity::quest_progress::Column::UserId.eq(user_id.to_string()))
            .filter(entity::quest_progress::Column::GuildId.eq(guild_id.to_string()));

        if let Some(status) = status {
            query = query.filter(entity::quest_progress::Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_desc(entity::quest_progress::Column::AcceptedAt)
            .find_also_related(entity::prelude::Quest)
            .all(self.db)
            .await?;

        Self::join_rows(rows)
    }

    /// Gets submissions awaiting review in a guild, oldest submission first.
    pub async fn get_pending_approvals(
        &self,
        guild_id: u64,
    ) -> Result<Vec<QuestWithProgress>, DbErr> {
        let rows = entity::prelude::QuestProgress::find()
            .filter(entity::quest_progress::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                entity::quest_progress::Column::Status.eq(ProgressStatus::Completed.as_str()),
            )
            .order_by_asc(entity::quest_progress::Column::CompletedAt)
            .find_also_related(entity::prelude::Quest)
            .all(self.db)
            .await?;

        Self::join_rows(rows)
    }

    /// Inserts a fresh `accepted` record.
    ///
    /// A concurrent accept that inserted first makes this insert hit the primary key;
    /// that conflict is reported as `None` rather than an error.
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Record created
    /// - `Ok(None)` - A record for this pair already exists
    /// - `Err(DbErr)` - Any other database error
    pub async fn insert_accepted(
        &self,
        quest: &Quest,
        user_id: u64,
        channel_id: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestProgress>, DbErr> {
        let result = entity::quest_progress::ActiveModel {
            quest_id: ActiveValue::Set(quest.quest_id.clone()),
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(quest.guild_id.to_string()),
            status: ActiveValue::Set(ProgressStatus::Accepted.as_str().to_string()),
            accepted_at: ActiveValue::Set(Some(now)),
            completed_at: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            proof_text: ActiveValue::Set(String::new()),
            proof_image_urls: ActiveValue::Set(serde_json::json!([])),
            approval_status: ActiveValue::Set(String::new()),
            channel_id: ActiveValue::Set(channel_id.map(|id| id.to_string())),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => QuestProgress::from_entity(entity).map(Some),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Inserts an `assigned` record unless the member already has one for the quest.
    ///
    /// # Returns
    /// - `Ok(true)` - Record inserted
    /// - `Ok(false)` - A record already existed and was left untouched
    pub async fn insert_assigned(
        &self,
        quest_id: &str,
        user_id: u64,
        guild_id: u64,
    ) -> Result<bool, DbErr> {
        let inserted = entity::prelude::QuestProgress::insert(entity::quest_progress::ActiveModel {
            quest_id: ActiveValue::Set(quest_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            status: ActiveValue::Set(ProgressStatus::Assigned.as_str().to_string()),
            accepted_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            proof_text: ActiveValue::Set(String::new()),
            proof_image_urls: ActiveValue::Set(serde_json::json!([])),
            approval_status: ActiveValue::Set(String::new()),
            channel_id: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::columns([
                entity::quest_progress::Column::QuestId,
                entity::quest_progress::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Starts a new cycle on an existing record, resetting it to `accepted`.
    ///
    /// The write only applies while the record is still in `expected` status, so two
    /// concurrent restarts cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Record reset
    /// - `Ok(None)` - Record missing or no longer in `expected` status
    pub async fn restart(
        &self,
        quest_id: &str,
        user_id: u64,
        expected: ProgressStatus,
        channel_id: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestProgress>, DbErr> {
        let changes = entity::quest_progress::ActiveModel {
            status: ActiveValue::Set(ProgressStatus::Accepted.as_str().to_string()),
            accepted_at: ActiveValue::Set(Some(now)),
            completed_at: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            proof_text: ActiveValue::Set(String::new()),
            proof_image_urls: ActiveValue::Set(serde_json::json!([])),
            approval_status: ActiveValue::Set(String::new()),
            channel_id: ActiveValue::Set(channel_id.map(|id| id.to_string())),
            ..Default::default()
        };

        self.update_if_status(quest_id, user_id, expected, changes)
            .await
    }

    /// Records submitted proof, moving the record to `completed`.
    ///
    /// # Arguments
    /// - `expected` - Status the record was read in (`assigned` or `accepted`)
    /// - `accepted_at` - Acceptance time to store; backfilled by the caller for assigned quests
    /// - `proof` - Submitted proof text and image URLs
    /// - `now` - Submission time
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Record completed
    /// - `Ok(None)` - Record missing or no longer in `expected` status
    pub async fn complete(
        &self,
        quest_id: &str,
        user_id: u64,
        expected: ProgressStatus,
        accepted_at: DateTime<Utc>,
        proof: SubmitProofParams,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestProgress>, DbErr> {
        let changes = entity::quest_progress::ActiveModel {
            status: ActiveValue::Set(ProgressStatus::Completed.as_str().to_string()),
            accepted_at: ActiveValue::Set(Some(accepted_at)),
            completed_at: ActiveValue::Set(Some(now)),
            proof_text: ActiveValue::Set(proof.proof_text),
            proof_image_urls: ActiveValue::Set(serde_json::json!(proof.proof_image_urls)),
            ..Default::default()
        };

        self.update_if_status(quest_id, user_id, expected, changes)
            .await
    }

    /// Records a review of a completed submission.
    ///
    /// # Arguments
    /// - `outcome` - `approved` or `rejected`
    /// - `audit_note` - Free-text note naming the reviewer
    /// - `now` - Review time, stored in `approved_at` for both outcomes
    ///
    /// # Returns
    /// - `Ok(Some(QuestProgress))` - Record reviewed
    /// - `Ok(None)` - Record missing or not `completed`
    pub async fn review(
        &self,
        quest_id: &str,
        user_id: u64,
        outcome: ProgressStatus,
        audit_note: String,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestProgress>, DbErr> {
        let changes = entity::quest_progress::ActiveModel {
            status: ActiveValue::Set(outcome.as_str().to_string()),
            approved_at: ActiveValue::Set(Some(now)),
            approval_status: ActiveValue::Set(audit_note),
            ..Default::default()
        };

        self.update_if_status(quest_id, user_id, ProgressStatus::Completed, changes)
            .await
    }

    /// Deletes a member's starter quest records in a guild.
    ///
    /// # Arguments
    /// - `keep_approved` - Leave approved starter records in place
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    pub async fn delete_starters_for_user(
        &self,
        user_id: u64,
        guild_id: u64,
        keep_approved: bool,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::QuestProgress::delete_many()
            .filter(entity::quest_progress::Column::UserId.eq(user_id.to_string()))
            .filter(entity::quest_progress::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::quest_progress::Column::QuestId.starts_with(STARTER_QUEST_PREFIX));

        if keep_approved {
            query = query.filter(
                entity::quest_progress::Column::Status.ne(ProgressStatus::Approved.as_str()),
            );
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Applies `changes` only if the record is currently in `expected` status.
    async fn update_if_status(
        &self,
        quest_id: &str,
        user_id: u64,
        expected: ProgressStatus,
        changes: entity::quest_progress::ActiveModel,
    ) -> Result<Option<QuestProgress>, DbErr> {
        let result = entity::prelude::QuestProgress::update_many()
            .set(changes)
            .filter(entity::quest_progress::Column::QuestId.eq(quest_id))
            .filter(entity::quest_progress::Column::UserId.eq(user_id.to_string()))
            .filter(entity::quest_progress::Column::Status.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get(quest_id, user_id).await
    }

    fn join_rows(
        rows: Vec<(entity::quest_progress::Model, Option<entity::quest::Model>)>,
    ) -> Result<Vec<QuestWithProgress>, DbErr> {
        rows.into_iter()
            .filter_map(|(progress, quest)| quest.map(|quest| (progress, quest)))
            .map(|(progress, quest)| {
                Ok(QuestWithProgress {
                    quest: Quest::from_entity(quest)?,
                    progress: QuestProgress::from_entity(progress)?,
                })
            })
            .collect()
    }
}
