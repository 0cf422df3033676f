//! Acceptance rules for quests.
//!
//! The gate is a pure function over facts the quest service has already loaded, so every
//! rule can be exercised without a database. Rules are checked in a fixed order and the
//! first failing rule decides the denial.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::server::model::{
    progress::{ProgressStatus, QuestProgress},
    quest::Quest,
    welcome::WelcomeRecord,
};

/// Hours a member must wait after a rejection before retrying a regular quest.
pub const REJECTION_COOLDOWN_HOURS: i64 = 24;

/// Why a member may not accept a quest. `Display` is the message shown to the member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcceptDenial {
    #[error("Quest not found.")]
    NotFound,

    #[error("This quest is not available.")]
    NotAvailable,

    #[error("You have already accepted this quest.")]
    AlreadyAccepted,

    /// A rejected starter quest from the current membership period.
    #[error("Starter quests can only be attempted once per membership period.")]
    StarterRetryForbidden,

    /// A regular quest rejected less than `REJECTION_COOLDOWN_HOURS` ago.
    #[error("You must wait {hours_left} more hour(s) before retrying this quest.")]
    Cooldown { hours_left: i64 },

    /// A starter quest already approved during the current membership period.
    #[error("You have already completed this starter quest.")]
    StarterAlreadyCompleted,

    #[error("You don't have the required roles for this quest.")]
    MissingRequiredRoles,

    /// A mentorless member has not finished an assigned starter quest.
    #[error("You must complete the {quest_id} quest before accepting other quests!")]
    StarterPrerequisite { quest_id: String },
}

/// Everything the gate needs to decide on one accept request.
pub struct EligibilityFacts<'a> {
    pub quest: Option<&'a Quest>,
    /// The member's existing record for this quest, if any.
    pub existing: Option<&'a QuestProgress>,
    /// Start of the current membership period: the member's most recent departure.
    pub latest_leave: Option<DateTime<Utc>>,
    pub user_role_ids: &'a [u64],
    pub welcome: Option<&'a WelcomeRecord>,
    /// The member's records for the starter quests assigned in `welcome`.
    pub starter_progress: &'a [QuestProgress],
}

/// Decides whether a member may accept a quest.
///
/// # Arguments
/// - `facts` - Quest, existing progress, membership and onboarding state
/// - `now` - Current time, used for the rejection cooldown
///
/// # Returns
/// - `Ok(())` - The member may accept
/// - `Err(AcceptDenial)` - The first rule that failed
pub fn check_eligibility(facts: &EligibilityFacts<'_>, now: DateTime<Utc>) -> Result<(), AcceptDenial> {
    let quest = facts.quest.ok_or(AcceptDenial::NotFound)?;
    if !quest.is_available() {
        return Err(AcceptDenial::NotAvailable);
    }

    let is_starter = quest.is_starter();

    if let Some(existing) = facts.existing {
        check_existing_progress(existing, is_starter, facts.latest_leave, now)?;
    }

    check_required_roles(quest, facts.user_role_ids)?;

    if !is_starter {
        check_starter_prerequisites(facts.welcome, facts.starter_progress)?;
    }

    Ok(())
}

/// Rules that depend on a previous attempt at the same quest.
fn check_existing_progress(
    existing: &QuestProgress,
    is_starter: bool,
    latest_leave: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), AcceptDenial> {
    match existing.status {
        ProgressStatus::Accepted | ProgressStatus::Completed => Err(AcceptDenial::AlreadyAccepted),
        ProgressStatus::Rejected if is_starter => {
            // forgiven only when the member left after being rejected
            let forgiven = matches!(
                (existing.completed_at, latest_leave),
                (Some(rejected_at), Some(leave)) if rejected_at < leave
            );
            if forgiven {
                Ok(())
            } else {
                Err(AcceptDenial::StarterRetryForbidden)
            }
        }
        ProgressStatus::Rejected => {
            let Some(rejected_at) = existing.completed_at else {
                return Ok(());
            };
            let elapsed = now - rejected_at;
            if elapsed < Duration::hours(REJECTION_COOLDOWN_HOURS) {
                let hours_left = (REJECTION_COOLDOWN_HOURS - elapsed.num_hours())
                    .clamp(1, REJECTION_COOLDOWN_HOURS);
                return Err(AcceptDenial::Cooldown { hours_left });
            }
            Ok(())
        }
        ProgressStatus::Approved if is_starter => {
            let approved_at = existing.approved_at.or(existing.completed_at);
            let from_current_period = match (approved_at, latest_leave) {
                (_, None) => true,
                (None, Some(_)) => true,
                (Some(approved_at), Some(leave)) => approved_at > leave,
            };
            if from_current_period {
                Err(AcceptDenial::StarterAlreadyCompleted)
            } else {
                Ok(())
            }
        }
        ProgressStatus::Approved | ProgressStatus::Assigned => Ok(()),
    }
}

fn check_required_roles(quest: &Quest, user_role_ids: &[u64]) -> Result<(), AcceptDenial> {
    if quest.required_role_ids.is_empty()
        || quest
            .required_role_ids
            .iter()
            .any(|role| user_role_ids.contains(role))
    {
        Ok(())
    } else {
        Err(AcceptDenial::MissingRequiredRoles)
    }
}

/// Mentorless members must finish their assigned starter quests before anything else.
fn check_starter_prerequisites(
    welcome: Option<&WelcomeRecord>,
    starter_progress: &[QuestProgress],
) -> Result<(), AcceptDenial> {
    let Some(welcome) = welcome else {
        return Ok(());
    };
    if welcome.has_mentor() {
        return Ok(());
    }

    for quest_id in welcome.starter_quests() {
        let approved = starter_progress
            .iter()
            .any(|p| p.quest_id == quest_id && p.status == ProgressStatus::Approved);
        if !approved {
            return Err(AcceptDenial::StarterPrerequisite {
                quest_id: quest_id.to_string(),
            });
        }
    }

    Ok(())
}
