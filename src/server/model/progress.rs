//! Domain models for per-member quest progress.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::{
    model::quest::Quest,
    util::parse::{parse_snowflake, parse_string_array},
};

/// Lifecycle state of one member's attempt at one quest.
///
/// ```text
/// assigned ──submit──▶ completed
/// accepted ──submit──▶ completed ──approve──▶ approved
///                                 └─reject───▶ rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Pushed to the member by onboarding without an explicit accept.
    Assigned,
    Accepted,
    Completed,
    Approved,
    Rejected,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a stored status string.
    ///
    /// # Returns
    /// - `Ok(ProgressStatus)` - Known status
    /// - `Err(DbErr::Custom)` - Unknown status stored in the database
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "assigned" => Ok(Self::Assigned),
            "accepted" => Ok(Self::Accepted),
            "completed" => Ok(Self::Completed),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(DbErr::Custom(format!("Unknown progress status: {}", other))),
        }
    }

    /// Whether proof may be submitted from this state.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Assigned | Self::Accepted)
    }
}

/// One member's progress on one quest. At most one exists per `(quest_id, user_id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestProgress {
    pub quest_id: String,
    pub user_id: u64,
    pub guild_id: u64,
    pub status: ProgressStatus,
    pub accepted_at: Option<DateTime<Utc>>,
    /// Submission time; doubles as the rejection timestamp for cooldowns.
    pub completed_at: Option<DateTime<Utc>>,
    /// Review time for both approvals and rejections.
    pub approved_at: Option<DateTime<Utc>>,
    pub proof_text: String,
    pub proof_image_urls: Vec<String>,
    /// Free-text audit note naming the reviewer and, for rejections, the reason.
    pub approval_status: String,
    /// Channel the quest was accepted from.
    pub channel_id: Option<u64>,
}

impl QuestProgress {
    /// Converts an entity model to a progress domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(QuestProgress)` - The converted progress record
    /// - `Err(DbErr::Custom)` - Unparseable snowflake, status or image list
    pub fn from_entity(entity: entity::quest_progress::Model) -> Result<Self, DbErr> {
        let user_id = parse_snowflake("user_id", &entity.user_id)?;
        let guild_id = parse_snowflake("guild_id", &entity.guild_id)?;
        let channel_id = entity
            .channel_id
            .as_deref()
            .map(|id| parse_snowflake("channel_id", id))
            .transpose()?;

        Ok(Self {
            quest_id: entity.quest_id,
            user_id,
            guild_id,
            status: ProgressStatus::from_db(&entity.status)?,
            accepted_at: entity.accepted_at,
            completed_at: entity.completed_at,
            approved_at: entity.approved_at,
            proof_text: entity.proof_text,
            proof_image_urls: parse_string_array("proof_image_urls", entity.proof_image_urls)?,
            approval_status: entity.approval_status,
            channel_id,
        })
    }

    /// An unsaved `assigned` record for a starter quest with no progress row yet.
    pub fn synthetic_assignment(quest: &Quest, user_id: u64) -> Self {
        Self {
            quest_id: quest.quest_id.clone(),
            user_id,
            guild_id: quest.guild_id,
            status: ProgressStatus::Assigned,
            accepted_at: None,
            completed_at: None,
            approved_at: None,
            proof_text: String::new(),
            proof_image_urls: Vec::new(),
            approval_status: String::new(),
            channel_id: None,
        }
    }
}

/// A quest paired with one member's progress on it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestWithProgress {
    pub quest: Quest,
    pub progress: QuestProgress,
}

/// Proof submitted when completing a quest.
#[derive(Debug, Clone, Default)]
pub struct SubmitProofParams {
    pub proof_text: String,
    pub proof_image_urls: Vec<String>,
}
