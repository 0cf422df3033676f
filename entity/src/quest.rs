use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub quest_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub creator_id: String,
    pub guild_id: String,
    #[sea_orm(column_type = "Text")]
    pub requirements: String,
    #[sea_orm(column_type = "Text")]
    pub reward: String,
    pub rank: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub required_role_ids: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quest_progress::Entity")]
    QuestProgress,
}

impl Related<super::quest_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
