use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_quests_table::Quests;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuestProgress::Table)
                    .if_not_exists()
                    .col(string(QuestProgress::QuestId))
                    .col(string(QuestProgress::UserId))
                    .col(string(QuestProgress::GuildId))
                    .col(string(QuestProgress::Status))
                    .col(timestamp_with_time_zone_null(QuestProgress::AcceptedAt))
                    .col(timestamp_with_time_zone_null(QuestProgress::CompletedAt))
                    .col(timestamp_with_time_zone_null(QuestProgress::ApprovedAt))
                    .col(text(QuestProgress::ProofText).default(""))
                    .col(json(QuestProgress::ProofImageUrls))
                    .col(text(QuestProgress::ApprovalStatus).default(""))
                    .col(string_null(QuestProgress::ChannelId))
                    .primary_key(
                        Index::create()
                            .col(QuestProgress::QuestId)
                            .col(QuestProgress::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quest_progress_quest_id")
                            .from(QuestProgress::Table, QuestProgress::QuestId)
                            .to(Quests::Table, Quests::QuestId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quest_progress_guild_status")
                    .table(QuestProgress::Table)
                    .col(QuestProgress::GuildId)
                    .col(QuestProgress::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuestProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuestProgress {
    Table,
    QuestId,
    UserId,
    GuildId,
    Status,
    AcceptedAt,
    CompletedAt,
    ApprovedAt,
    ProofText,
    ProofImageUrls,
    ApprovalStatus,
    ChannelId,
}
