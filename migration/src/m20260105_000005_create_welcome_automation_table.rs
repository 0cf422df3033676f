use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WelcomeAutomation::Table)
                    .if_not_exists()
                    .col(string(WelcomeAutomation::UserId))
                    .col(string(WelcomeAutomation::GuildId))
                    .col(string_null(WelcomeAutomation::MentorId))
                    .col(string_null(WelcomeAutomation::StarterQuest1))
                    .col(string_null(WelcomeAutomation::StarterQuest2))
                    .col(boolean(WelcomeAutomation::Quest1Completed).default(false))
                    .col(boolean(WelcomeAutomation::Quest2Completed).default(false))
                    .col(
                        timestamp_with_time_zone(WelcomeAutomation::JoinDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(WelcomeAutomation::LastActivity)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WelcomeAutomation::UserId)
                            .col(WelcomeAutomation::GuildId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WelcomeAutomation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WelcomeAutomation {
    Table,
    UserId,
    GuildId,
    MentorId,
    #[sea_orm(iden = "starter_quest_1")]
    StarterQuest1,
    #[sea_orm(iden = "starter_quest_2")]
    StarterQuest2,
    #[sea_orm(iden = "quest_1_completed")]
    Quest1Completed,
    #[sea_orm(iden = "quest_2_completed")]
    Quest2Completed,
    JoinDate,
    LastActivity,
}
