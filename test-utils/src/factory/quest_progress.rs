//! Quest progress factory for creating per-user lifecycle rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test progress rows.
///
/// Timestamps left unset are derived from the status when the row is built, so
/// `.status("completed")` alone produces a row with `accepted_at` and `completed_at`.
pub struct QuestProgressFactory<'a> {
    db: &'a DatabaseConnection,
    quest_id: String,
    guild_id: String,
    user_id: String,
    status: String,
    accepted_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    approved_at: Option<DateTime<Utc>>,
    proof_text: String,
    approval_status: String,
    channel_id: Option<String>,
}

impl<'a> QuestProgressFactory<'a> {
    /// Creates a new QuestProgressFactory for the given quest and user.
    ///
    /// Defaults:
    /// - status: `"accepted"`
    /// - timestamps: derived from status at build time
    /// - channel_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `quest` - Quest the progress row belongs to
    /// - `user_id` - Member owning the row
    ///
    /// # Returns
    /// - `QuestProgressFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        quest: &entity::quest::Model,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            quest_id: quest.quest_id.clone(),
            guild_id: quest.guild_id.clone(),
            user_id: user_id.into(),
            status: "accepted".to_string(),
            accepted_at: None,
            completed_at: None,
            approved_at: None,
            proof_text: String::new(),
            approval_status: String::new(),
            channel_id: None,
        }
    }

    /// Sets the progress status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the acceptance timestamp.
    pub fn accepted_at(mut self, accepted_at: DateTime<Utc>) -> Self {
        self.accepted_at = Some(accepted_at);
        self
    }

    /// Sets the submission (or rejection) timestamp.
    pub fn completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets the review timestamp.
    pub fn approved_at(mut self, approved_at: DateTime<Utc>) -> Self {
        self.approved_at = Some(approved_at);
        self
    }

    /// Sets the submitted proof text.
    pub fn proof_text(mut self, proof_text: impl Into<String>) -> Self {
        self.proof_text = proof_text.into();
        self
    }

    /// Sets the originating channel.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Builds and inserts the progress row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quest_progress::Model)` - Created progress entity
    /// - `Err(DbErr)` - Database error during insert (missing quest, duplicate pair)
    pub async fn build(self) -> Result<entity::quest_progress::Model, DbErr> {
        let now = Utc::now();
        let status = self.status.as_str();
        let submitted = matches!(status, "completed" | "approved" | "rejected");
        let reviewed = matches!(status, "approved" | "rejected");

        let accepted_at = match self.accepted_at {
            Some(at) => Some(at),
            None if status != "assigned" => Some(now),
            None => None,
        };
        let completed_at = match self.completed_at {
            Some(at) => Some(at),
            None if submitted => Some(now),
            None => None,
        };
        let approved_at = match self.approved_at {
            Some(at) => Some(at),
            None if reviewed => completed_at,
            None => None,
        };

        entity::quest_progress::ActiveModel {
            quest_id: ActiveValue::Set(self.quest_id),
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            status: ActiveValue::Set(self.status),
            accepted_at: ActiveValue::Set(accepted_at),
            completed_at: ActiveValue::Set(completed_at),
            approved_at: ActiveValue::Set(approved_at),
            proof_text: ActiveValue::Set(self.proof_text),
            proof_image_urls: ActiveValue::Set(serde_json::json!([])),
            approval_status: ActiveValue::Set(self.approval_status),
            channel_id: ActiveValue::Set(self.channel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an accepted progress row for the given quest and user.
pub async fn create_progress(
    db: &DatabaseConnection,
    quest: &entity::quest::Model,
    user_id: impl Into<String>,
) -> Result<entity::quest_progress::Model, DbErr> {
    QuestProgressFactory::new(db, quest, user_id).build().await
}
