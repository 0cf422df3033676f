use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::{member::MemberProfile, progress::QuestProgress},
    service::{ledger::LedgerService, quest::QuestService, welcome::WelcomeService},
    util::reward::extract_points,
};

/// Result of approving a submission and paying its reward.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardOutcome {
    pub progress: QuestProgress,
    /// Points granted, or `None` when the grant failed after approval.
    pub points_awarded: Option<i32>,
}

/// Approves submissions and pays out their reward.
///
/// Approval and payout are separate writes with no compensation between them: if the
/// payout fails the submission stays approved and the failure is only logged.
pub struct RewardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RewardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approves a completed submission and grants the quest's reward.
    ///
    /// The amount is read from the quest's free-text reward. Approving a starter quest also
    /// flags it completed on the member's welcome record.
    ///
    /// # Arguments
    /// - `quest_id` - Quest being reviewed
    /// - `user_id` - Submitting member
    /// - `approver_id` - Reviewer
    /// - `profile` - Member names cached on their ledger entry
    ///
    /// # Returns
    /// - `Ok(Some(AwardOutcome))` - Submission approved; see `points_awarded`
    /// - `Ok(None)` - Quest or submission missing, or not `completed`
    /// - `Err(AppError)` - Approval failed in storage
    pub async fn approve_and_award(
        &self,
        quest_id: &str,
        user_id: u64,
        approver_id: u64,
        profile: &MemberProfile,
    ) -> Result<Option<AwardOutcome>, AppError> {
        let quest_service = QuestService::new(self.db);

        let Some(quest) = quest_service.get_quest(quest_id).await? else {
            return Ok(None);
        };
        let Some(progress) = quest_service
            .approve_quest(quest_id, user_id, approver_id)
            .await?
        else {
            return Ok(None);
        };

        let amount = extract_points(&quest.reward);
        let points_awarded = match LedgerService::new(self.db)
            .adjust_points(quest.guild_id, user_id, amount, profile)
            .await
        {
            Ok(_) => Some(amount),
            Err(err) => {
                tracing::error!(
                    "Quest {} approved for user {} but awarding {} points failed: {}",
                    quest_id,
                    user_id,
                    amount,
                    err
                );
                None
            }
        };

        if quest.is_starter() {
            if let Err(err) = WelcomeService::new(self.db)
                .mark_starter_completed(quest.guild_id, user_id, quest_id)
                .await
            {
                tracing::error!(
                    "Failed to flag starter quest {} completed for user {}: {}",
                    quest_id,
                    user_id,
                    err
                );
            }
        }

        Ok(Some(AwardOutcome {
            progress,
            points_awarded,
        }))
    }
}
