use crate::server::{model::progress::ProgressStatus, service::welcome::WelcomeService};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, quest::QuestFactory, quest_progress::QuestProgressFactory,
        welcome_automation::WelcomeFactory,
    },
};

mod assign_mentor;

fn candidates() -> Vec<String> {
    ["starter1", "starter2", "starter3"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
