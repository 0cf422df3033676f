//! Quest factory for creating test quest catalog entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test quests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::quest::QuestFactory;
///
/// let quest = QuestFactory::new(&db, "1000")
///     .reward("50 points")
///     .required_role_ids(vec!["555"])
///     .build()
///     .await?;
/// ```
pub struct QuestFactory<'a> {
    db: &'a DatabaseConnection,
    quest_id: String,
    guild_id: String,
    title: String,
    description: String,
    creator_id: String,
    requirements: String,
    reward: String,
    rank: String,
    category: String,
    status: String,
    required_role_ids: Vec<String>,
    created_at: DateTime<Utc>,
}

impl<'a> QuestFactory<'a> {
    /// Creates a new QuestFactory with default values.
    ///
    /// Defaults:
    /// - quest_id: `"q{id}"` where id is auto-incremented
    /// - title: `"Quest {id}"`
    /// - reward: `"25 points"`
    /// - rank: `"normal"`, category: `"other"`, status: `"available"`
    /// - required_role_ids: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the quest belongs to
    ///
    /// # Returns
    /// - `QuestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            quest_id: format!("q{:07}", id),
            guild_id: guild_id.into(),
            title: format!("Quest {}", id),
            description: "Test quest description".to_string(),
            creator_id: "900000000000000000".to_string(),
            requirements: "Post a screenshot".to_string(),
            reward: "25 points".to_string(),
            rank: "normal".to_string(),
            category: "other".to_string(),
            status: "available".to_string(),
            required_role_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the quest id.
    pub fn quest_id(mut self, quest_id: impl Into<String>) -> Self {
        self.quest_id = quest_id.into();
        self
    }

    /// Sets the quest title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the creator's Discord id.
    pub fn creator_id(mut self, creator_id: impl Into<String>) -> Self {
        self.creator_id = creator_id.into();
        self
    }

    /// Sets the free-text reward.
    pub fn reward(mut self, reward: impl Into<String>) -> Self {
        self.reward = reward.into();
        self
    }

    /// Sets the stored rank string.
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the roles required to accept the quest.
    ///
    /// # Arguments
    /// - `role_ids` - Discord role ids as strings
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn required_role_ids(mut self, role_ids: Vec<&str>) -> Self {
        self.required_role_ids = role_ids.into_iter().map(str::to_string).collect();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the quest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::quest::Model)` - Created quest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quest::Model, DbErr> {
        entity::quest::ActiveModel {
            quest_id: ActiveValue::Set(self.quest_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            creator_id: ActiveValue::Set(self.creator_id),
            guild_id: ActiveValue::Set(self.guild_id),
            requirements: ActiveValue::Set(self.requirements),
            reward: ActiveValue::Set(self.reward),
            rank: ActiveValue::Set(self.rank),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            required_role_ids: ActiveValue::Set(serde_json::json!(self.required_role_ids)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available, unrestricted quest in the given guild.
///
/// Shorthand for `QuestFactory::new(db, guild_id).build().await`.
pub async fn create_quest(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db, guild_id).build().await
}

/// Creates an available starter quest with the given reserved id.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the quest belongs to
/// - `quest_id` - Reserved id, conventionally `starter1`..`starter5`
///
/// # Returns
/// - `Ok(entity::quest::Model)` - Created quest entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_starter_quest(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    quest_id: impl Into<String>,
) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db, guild_id)
        .quest_id(quest_id)
        .rank("starter")
        .reward("10 points")
        .build()
        .await
}
