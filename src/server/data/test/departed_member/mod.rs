use crate::server::{
    data::departed_member::DepartedMemberRepository,
    model::member::{MemberProfile, RecordDepartureParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::departed_member::DepartedMemberFactory};

mod create;
