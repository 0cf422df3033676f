use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leaderboard::Table)
                    .if_not_exists()
                    .col(string(Leaderboard::GuildId))
                    .col(string(Leaderboard::UserId))
                    .col(string(Leaderboard::Username))
                    .col(string(Leaderboard::DisplayName))
                    .col(
                        integer(Leaderboard::Points)
                            .default(0)
                            .check(Expr::col(Leaderboard::Points).gte(0)),
                    )
                    .col(
                        integer(Leaderboard::TotalPointsEarned)
                            .default(0)
                            .check(Expr::col(Leaderboard::TotalPointsEarned).gte(0)),
                    )
                    .col(
                        timestamp_with_time_zone(Leaderboard::LastUpdated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Leaderboard::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Leaderboard::GuildId)
                            .col(Leaderboard::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_guild_points")
                    .table(Leaderboard::Table)
                    .col(Leaderboard::GuildId)
                    .col((Leaderboard::Points, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leaderboard {
    Table,
    GuildId,
    UserId,
    Username,
    DisplayName,
    Points,
    TotalPointsEarned,
    LastUpdated,
    CreatedAt,
}
