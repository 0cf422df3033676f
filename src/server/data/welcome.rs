use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::welcome::WelcomeRecord;

pub struct WelcomeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WelcomeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a member's onboarding record.
    pub async fn get(&self, guild_id: u64, user_id: u64) -> Result<Option<WelcomeRecord>, DbErr> {
        entity::prelude::WelcomeAutomation::find_by_id((user_id.to_string(), guild_id.to_string()))
            .one(self.db)
            .await?
            .map(WelcomeRecord::from_entity)
            .transpose()
    }

    /// Creates or resets a member's onboarding record for a new membership period.
    ///
    /// Completion flags are cleared and `join_date` restarts on every call.
    ///
    /// # Arguments
    /// - `guild_id` - Guild joined
    /// - `user_id` - Joining member
    /// - `mentor_id` - Mentor, if one was paired at join
    /// - `starter_quests` - Up to two assigned starter quest ids, in slot order
    pub async fn upsert(
        &self,
        guild_id: u64,
        user_id: u64,
        mentor_id: Option<u64>,
        starter_quests: &[String],
    ) -> Result<WelcomeRecord, DbErr> {
        let now = Utc::now();

        entity::prelude::WelcomeAutomation::insert(entity::welcome_automation::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            mentor_id: ActiveValue::Set(mentor_id.map(|id| id.to_string())),
            starter_quest_1: ActiveValue::Set(starter_quests.first().cloned()),
            starter_quest_2: ActiveValue::Set(starter_quests.get(1).cloned()),
            quest_1_completed: ActiveValue::Set(false),
            quest_2_completed: ActiveValue::Set(false),
            join_date: ActiveValue::Set(now),
            last_activity: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::welcome_automation::Column::UserId,
                entity::welcome_automation::Column::GuildId,
            ])
            .update_columns([
                entity::welcome_automation::Column::MentorId,
                entity::welcome_automation::Column::StarterQuest1,
                entity::welcome_automation::Column::StarterQuest2,
                entity::welcome_automation::Column::Quest1Completed,
                entity::welcome_automation::Column::Quest2Completed,
                entity::welcome_automation::Column::JoinDate,
                entity::welcome_automation::Column::LastActivity,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.get(guild_id, user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Welcome record for user {} in guild {} not found after upsert",
                user_id, guild_id
            )))
    }

    /// Sets a member's mentor.
    ///
    /// # Returns
    /// - `Ok(true)` - Record updated
    /// - `Ok(false)` - Member has no onboarding record
    pub async fn set_mentor(&self, guild_id: u64, user_id: u64, mentor_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::WelcomeAutomation::update_many()
            .set(entity::welcome_automation::ActiveModel {
                mentor_id: ActiveValue::Set(Some(mentor_id.to_string())),
                last_activity: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::welcome_automation::Column::UserId.eq(user_id.to_string()))
            .filter(entity::welcome_automation::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the completion flag of whichever slot holds `quest_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - A slot matched and was flagged
    /// - `Ok(false)` - The quest is not assigned to the member
    pub async fn mark_starter_completed(
        &self,
        guild_id: u64,
        user_id: u64,
        quest_id: &str,
    ) -> Result<bool, DbErr> {
        let now = Utc::now();

        let first = entity::prelude::WelcomeAutomation::update_many()
            .set(entity::welcome_automation::ActiveModel {
                quest_1_completed: ActiveValue::Set(true),
                last_activity: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::welcome_automation::Column::UserId.eq(user_id.to_string()))
            .filter(entity::welcome_automation::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::welcome_automation::Column::StarterQuest1.eq(quest_id))
            .exec(self.db)
            .await?;

        let second = entity::prelude::WelcomeAutomation::update_many()
            .set(entity::welcome_automation::ActiveModel {
                quest_2_completed: ActiveValue::Set(true),
                last_activity: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::welcome_automation::Column::UserId.eq(user_id.to_string()))
            .filter(entity::welcome_automation::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::welcome_automation::Column::StarterQuest2.eq(quest_id))
            .exec(self.db)
            .await?;

        Ok(first.rows_affected + second.rows_affected > 0)
    }
}
