//! Domain model for the onboarding (welcome/mentorship) record.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::util::parse::parse_snowflake;

/// Onboarding state of a member: their mentor, if any, and assigned starter quests.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeRecord {
    pub user_id: u64,
    pub guild_id: u64,
    /// `None` means the member is on the independent (mentorless) track.
    pub mentor_id: Option<u64>,
    pub starter_quest_1: Option<String>,
    pub starter_quest_2: Option<String>,
    pub quest_1_completed: bool,
    pub quest_2_completed: bool,
    pub join_date: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl WelcomeRecord {
    /// Converts an entity model to a welcome record at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(WelcomeRecord)` - The converted record
    /// - `Err(DbErr::Custom)` - Failed to parse user_id, guild_id or mentor_id
    pub fn from_entity(entity: entity::welcome_automation::Model) -> Result<Self, DbErr> {
        let mentor_id = entity
            .mentor_id
            .as_deref()
            .map(|id| parse_snowflake("mentor_id", id))
            .transpose()?;

        Ok(Self {
            user_id: parse_snowflake("user_id", &entity.user_id)?,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            mentor_id,
            starter_quest_1: entity.starter_quest_1,
            starter_quest_2: entity.starter_quest_2,
            quest_1_completed: entity.quest_1_completed,
            quest_2_completed: entity.quest_2_completed,
            join_date: entity.join_date,
            last_activity: entity.last_activity,
        })
    }

    /// Assigned starter quest ids in slot order.
    pub fn starter_quests(&self) -> Vec<&str> {
        [&self.starter_quest_1, &self.starter_quest_2]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
            .collect()
    }

    pub fn has_mentor(&self) -> bool {
        self.mentor_id.is_some()
    }
}
