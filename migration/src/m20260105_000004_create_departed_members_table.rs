use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DepartedMembers::Table)
                    .if_not_exists()
                    .col(string(DepartedMembers::MemberId))
                    .col(string(DepartedMembers::GuildId))
                    .col(timestamp_with_time_zone(DepartedMembers::LeaveDate))
                    .col(string(DepartedMembers::Username))
                    .col(string(DepartedMembers::DisplayName))
                    .col(string_null(DepartedMembers::HighestRole))
                    .col(integer(DepartedMembers::TotalPoints).default(0))
                    .col(timestamp_with_time_zone_null(DepartedMembers::JoinDate))
                    .col(integer(DepartedMembers::TimesLeft).default(1))
                    .col(
                        timestamp_with_time_zone(DepartedMembers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DepartedMembers::MemberId)
                            .col(DepartedMembers::GuildId)
                            .col(DepartedMembers::LeaveDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepartedMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DepartedMembers {
    Table,
    MemberId,
    GuildId,
    LeaveDate,
    Username,
    DisplayName,
    HighestRole,
    TotalPoints,
    JoinDate,
    TimesLeft,
    CreatedAt,
}
