use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quest_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub quest_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub guild_id: String,
    pub status: String,
    pub accepted_at: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub approved_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text")]
    pub proof_text: String,
    pub proof_image_urls: Json,
    #[sea_orm(column_type = "Text")]
    pub approval_status: String,
    pub channel_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quest::Entity",
        from = "Column::QuestId",
        to = "super::quest::Column::QuestId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Quest,
}

impl Related<super::quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
