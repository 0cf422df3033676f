use crate::server::{
    model::{member::MemberProfile, progress::ProgressStatus},
    service::{ledger::LedgerService, reward::RewardService, welcome::WelcomeService},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, quest::QuestFactory, quest_progress::QuestProgressFactory},
};


fn profile() -> MemberProfile {
    MemberProfile::new("alice", "Alice")
}
