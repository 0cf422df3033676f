//! Domain models for guild membership history.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::util::parse::parse_snowflake;

/// Cached naming of a member, refreshed on every ledger touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub username: String,
    pub display_name: String,
}

impl MemberProfile {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
        }
    }
}

/// Snapshot of a member taken when they left a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartedMember {
    pub member_id: u64,
    pub guild_id: u64,
    pub leave_date: DateTime<Utc>,
    pub username: String,
    pub display_name: String,
    pub highest_role: Option<String>,
    /// Balance at the moment of leaving.
    pub total_points: i32,
    pub join_date: Option<DateTime<Utc>>,
    /// How many times the member has left (and, once incremented on return, rejoined).
    pub times_left: i32,
}

impl DepartedMember {
    /// Converts an entity model to a departure record at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DepartedMember)` - The converted departure
    /// - `Err(DbErr::Custom)` - Failed to parse member_id or guild_id
    pub fn from_entity(entity: entity::departed_member::Model) -> Result<Self, DbErr> {
        Ok(Self {
            member_id: parse_snowflake("member_id", &entity.member_id)?,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            leave_date: entity.leave_date,
            username: entity.username,
            display_name: entity.display_name,
            highest_role: entity.highest_role,
            total_points: entity.total_points,
            join_date: entity.join_date,
            times_left: entity.times_left,
        })
    }
}

/// Member data captured when a departure is recorded.
#[derive(Debug, Clone)]
pub struct RecordDepartureParams {
    pub guild_id: u64,
    pub member_id: u64,
    pub profile: MemberProfile,
    pub highest_role: Option<String>,
    pub join_date: Option<DateTime<Utc>>,
}
