use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quests::Table)
                    .if_not_exists()
                    .col(string(Quests::QuestId).primary_key())
                    .col(string(Quests::Title))
                    .col(text(Quests::Description))
                    .col(string(Quests::CreatorId))
                    .col(string(Quests::GuildId))
                    .col(text(Quests::Requirements).default(""))
                    .col(text(Quests::Reward).default(""))
                    .col(string(Quests::Rank).default("normal"))
                    .col(string(Quests::Category).default("other"))
                    .col(string(Quests::Status).default("available"))
                    .col(
                        timestamp_with_time_zone(Quests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(json(Quests::RequiredRoleIds))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quests_guild_status")
                    .table(Quests::Table)
                    .col(Quests::GuildId)
                    .col(Quests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quests {
    Table,
    QuestId,
    Title,
    Description,
    CreatorId,
    GuildId,
    Requirements,
    Reward,
    Rank,
    Category,
    Status,
    CreatedAt,
    RequiredRoleIds,
}
