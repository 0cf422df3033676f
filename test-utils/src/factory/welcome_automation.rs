//! Welcome automation factory for creating onboarding records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test welcome/mentorship records.
pub struct WelcomeFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    mentor_id: Option<String>,
    starter_quest_1: Option<String>,
    starter_quest_2: Option<String>,
    quest_1_completed: bool,
    quest_2_completed: bool,
}

impl<'a> WelcomeFactory<'a> {
    /// Creates a new WelcomeFactory for a mentorless member with no starter quests.
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            mentor_id: None,
            starter_quest_1: None,
            starter_quest_2: None,
            quest_1_completed: false,
            quest_2_completed: false,
        }
    }

    /// Sets the mentor.
    pub fn mentor_id(mut self, mentor_id: impl Into<String>) -> Self {
        self.mentor_id = Some(mentor_id.into());
        self
    }

    /// Assigns up to two starter quests.
    ///
    /// # Arguments
    /// - `first` - First starter quest id
    /// - `second` - Optional second starter quest id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn starter_quests(mut self, first: impl Into<String>, second: Option<&str>) -> Self {
        self.starter_quest_1 = Some(first.into());
        self.starter_quest_2 = second.map(str::to_string);
        self
    }

    /// Sets the completion flags.
    pub fn completed(mut self, quest_1: bool, quest_2: bool) -> Self {
        self.quest_1_completed = quest_1;
        self.quest_2_completed = quest_2;
        self
    }

    /// Builds and inserts the welcome record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::welcome_automation::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::welcome_automation::Model, DbErr> {
        let now = Utc::now();
        entity::welcome_automation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            mentor_id: ActiveValue::Set(self.mentor_id),
            starter_quest_1: ActiveValue::Set(self.starter_quest_1),
            starter_quest_2: ActiveValue::Set(self.starter_quest_2),
            quest_1_completed: ActiveValue::Set(self.quest_1_completed),
            quest_2_completed: ActiveValue::Set(self.quest_2_completed),
            join_date: ActiveValue::Set(now),
            last_activity: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mentorless welcome record with the given starter quests assigned.
pub async fn create_welcome(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    user_id: impl Into<String>,
    starter_quests: (&str, Option<&str>),
) -> Result<entity::welcome_automation::Model, DbErr> {
    WelcomeFactory::new(db, guild_id, user_id)
        .starter_quests(starter_quests.0, starter_quests.1)
        .build()
        .await
}
