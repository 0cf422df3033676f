use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::quest::{CreateQuestParams, PurgeSummary, Quest, QuestStatus};

pub struct QuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new quest with the given id.
    ///
    /// The quest starts `available` with `created_at` set to now.
    ///
    /// # Arguments
    /// - `quest_id` - Id to store; `params.quest_id` is ignored
    /// - `params` - Quest fields
    ///
    /// # Returns
    /// - `Ok(Quest)` - The created quest
    /// - `Err(DbErr)` - Insert failed (including a duplicate id)
    pub async fn create(&self, quest_id: String, params: CreateQuestParams) -> Result<Quest, DbErr> {
        let required_role_ids: Vec<String> = params
            .required_role_ids
            .iter()
            .map(|id| id.to_string())
            .collect();

        let entity = entity::quest::ActiveModel {
            quest_id: ActiveValue::Set(quest_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            creator_id: ActiveValue::Set(params.creator_id.to_string()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            requirements: ActiveValue::Set(params.requirements),
            reward: ActiveValue::Set(params.reward),
            rank: ActiveValue::Set(params.rank.as_str().to_string()),
            category: ActiveValue::Set(params.category),
            status: ActiveValue::Set(QuestStatus::Available.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            required_role_ids: ActiveValue::Set(serde_json::json!(required_role_ids)),
        }
        .insert(self.db)
        .await?;

        Quest::from_entity(entity)
    }

    /// Gets a quest by id.
    pub async fn get_by_id(&self, quest_id: &str) -> Result<Option<Quest>, DbErr> {
        entity::prelude::Quest::find_by_id(quest_id.to_string())
            .one(self.db)
            .await?
            .map(Quest::from_entity)
            .transpose()
    }

    /// Gets every quest with the given ids, in no particular order.
    pub async fn get_by_ids(&self, quest_ids: &[&str]) -> Result<Vec<Quest>, DbErr> {
        if quest_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Quest::find()
            .filter(entity::quest::Column::QuestId.is_in(quest_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Quest::from_entity)
            .collect()
    }

    /// Gets the quests of a guild, newest first, optionally restricted to one status.
    pub async fn get_by_guild(
        &self,
        guild_id: u64,
        status: Option<QuestStatus>,
    ) -> Result<Vec<Quest>, DbErr> {
        let mut query = entity::prelude::Quest::find()
            .filter(entity::quest::Column::GuildId.eq(guild_id.to_string()));

        if let Some(status) = status {
            query = query.filter(entity::quest::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::quest::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Quest::from_entity)
            .collect()
    }

    /// Writes the editable fields of a quest.
    ///
    /// Id, creator, guild and creation time are never changed.
    ///
    /// # Returns
    /// - `Ok(true)` - Quest updated
    /// - `Ok(false)` - No quest with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, quest: &Quest) -> Result<bool, DbErr> {
        let required_role_ids: Vec<String> = quest
            .required_role_ids
            .iter()
            .map(|id| id.to_string())
            .collect();

        let result = entity::prelude::Quest::update_many()
            .set(entity::quest::ActiveModel {
                title: ActiveValue::Set(quest.title.clone()),
                description: ActiveValue::Set(quest.description.clone()),
                requirements: ActiveValue::Set(quest.requirements.clone()),
                reward: ActiveValue::Set(quest.reward.clone()),
                rank: ActiveValue::Set(quest.rank.as_str().to_string()),
                category: ActiveValue::Set(quest.category.clone()),
                status: ActiveValue::Set(quest.status.as_str().to_string()),
                required_role_ids: ActiveValue::Set(serde_json::json!(required_role_ids)),
                ..Default::default()
            })
            .filter(entity::quest::Column::QuestId.eq(quest.quest_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a quest together with every progress record for it.
    ///
    /// Both deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Quest deleted
    /// - `Ok(false)` - No quest with that id
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, quest_id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::QuestProgress::delete_many()
            .filter(entity::quest_progress::Column::QuestId.eq(quest_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Quest::delete_by_id(quest_id.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every quest and progress record of a guild in one transaction.
    pub async fn purge_guild(&self, guild_id: u64) -> Result<PurgeSummary, DbErr> {
        let guild_id = guild_id.to_string();
        let txn = self.db.begin().await?;

        let progress = entity::prelude::QuestProgress::delete_many()
            .filter(entity::quest_progress::Column::GuildId.eq(guild_id.as_str()))
            .exec(&txn)
            .await?;

        let quests = entity::prelude::Quest::delete_many()
            .filter(entity::quest::Column::GuildId.eq(guild_id.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(PurgeSummary {
            quests_deleted: quests.rows_affected,
            progress_deleted: progress.rows_affected,
        })
    }
}
