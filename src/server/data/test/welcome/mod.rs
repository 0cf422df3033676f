use crate::server::data::welcome::WelcomeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::welcome_automation::WelcomeFactory};

mod upsert;
