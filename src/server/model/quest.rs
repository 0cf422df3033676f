//! Domain models for the quest catalog.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::util::parse::{parse_snowflake, parse_string_array};

/// Reserved id prefix marking onboarding quests.
pub const STARTER_QUEST_PREFIX: &str = "starter";

/// Length of generated quest ids.
pub const QUEST_ID_LENGTH: usize = 8;

/// Returns whether a quest id is reserved for onboarding.
pub fn is_starter_quest_id(quest_id: &str) -> bool {
    quest_id.starts_with(STARTER_QUEST_PREFIX)
}

/// Difficulty of a quest, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuestRank {
    Easy,
    Normal,
    Medium,
    Hard,
    Impossible,
}

impl QuestRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Impossible => "impossible",
        }
    }

    /// Parses a stored or user supplied rank.
    ///
    /// `starter` is the onboarding alias of `normal`. Unknown values fall back to `normal`
    /// so a quest edited by hand never becomes unreadable.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            "impossible" => Self::Impossible,
            _ => Self::Normal,
        }
    }
}

/// Catalog-level quest status.
///
/// Per-member state lives in `QuestProgress`; only `Available` matters for acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    Available,
    Accepted,
    Completed,
    Approved,
    Rejected,
    Cancelled,
}

impl QuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a stored status string.
    ///
    /// # Returns
    /// - `Ok(QuestStatus)` - Known status
    /// - `Err(DbErr::Custom)` - Unknown status stored in the database
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "available" => Ok(Self::Available),
            "accepted" => Ok(Self::Accepted),
            "completed" => Ok(Self::Completed),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DbErr::Custom(format!("Unknown quest status: {}", other))),
        }
    }
}

/// A task members can accept for a reward.
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    /// Short opaque id, unique per deployment.
    pub quest_id: String,
    pub title: String,
    pub description: String,
    /// Discord ID of the member who created the quest.
    pub creator_id: u64,
    pub guild_id: u64,
    pub requirements: String,
    /// Free-text reward; point amounts are extracted by `util::reward`.
    pub reward: String,
    pub rank: QuestRank,
    pub category: String,
    pub status: QuestStatus,
    /// Roles allowed to accept the quest. Empty means unrestricted.
    pub required_role_ids: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

impl Quest {
    /// Converts an entity model to a quest domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Quest)` - The converted quest
    /// - `Err(DbErr::Custom)` - Unparseable snowflake, role list or status
    pub fn from_entity(entity: entity::quest::Model) -> Result<Self, DbErr> {
        let creator_id = parse_snowflake("creator_id", &entity.creator_id)?;
        let guild_id = parse_snowflake("guild_id", &entity.guild_id)?;
        let required_role_ids =
            parse_string_array("required_role_ids", entity.required_role_ids)?
                .iter()
                .map(|id| parse_snowflake("required_role_ids", id))
                .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            quest_id: entity.quest_id,
            title: entity.title,
            description: entity.description,
            creator_id,
            guild_id,
            requirements: entity.requirements,
            reward: entity.reward,
            rank: QuestRank::parse(&entity.rank),
            category: entity.category,
            status: QuestStatus::from_db(&entity.status)?,
            required_role_ids,
            created_at: entity.created_at,
        })
    }

    pub fn is_starter(&self) -> bool {
        is_starter_quest_id(&self.quest_id)
    }

    pub fn is_available(&self) -> bool {
        self.status == QuestStatus::Available
    }
}

/// Parameters for creating a new quest.
#[derive(Debug, Clone)]
pub struct CreateQuestParams {
    /// Explicit id, used to seed reserved `starter*` quests. Generated when `None`.
    pub quest_id: Option<String>,
    pub title: String,
    pub description: String,
    pub creator_id: u64,
    pub guild_id: u64,
    pub requirements: String,
    pub reward: String,
    pub rank: QuestRank,
    pub category: String,
    pub required_role_ids: Vec<u64>,
}

/// Row counts removed by a guild-wide purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurgeSummary {
    pub quests_deleted: u64,
    pub progress_deleted: u64,
}
