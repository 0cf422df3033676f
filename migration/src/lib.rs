pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_quests_table;
mod m20260105_000002_create_quest_progress_table;
mod m20260105_000003_create_leaderboard_table;
mod m20260105_000004_create_departed_members_table;
mod m20260105_000005_create_welcome_automation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_quests_table::Migration),
            Box::new(m20260105_000002_create_quest_progress_table::Migration),
            Box::new(m20260105_000003_create_leaderboard_table::Migration),
            Box::new(m20260105_000004_create_departed_members_table::Migration),
            Box::new(m20260105_000005_create_welcome_automation_table::Migration),
        ]
    }
}
