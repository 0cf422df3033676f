//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a quest and a progress row for the given user in the given status.
///
/// Timestamps are filled in to match the status: `accepted_at` for every status past
/// `assigned`, `completed_at` once submitted, `approved_at` once reviewed.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the quest belongs to
/// - `user_id` - Member owning the progress row
/// - `status` - Progress status string
///
/// # Returns
/// - `Ok((quest, progress))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_quest_with_progress(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    status: &str,
) -> Result<(entity::quest::Model, entity::quest_progress::Model), DbErr> {
    let quest = crate::factory::quest::create_quest(db, guild_id).await?;
    let progress = crate::factory::quest_progress::QuestProgressFactory::new(db, &quest, user_id)
        .status(status)
        .build()
        .await?;

    Ok((quest, progress))
}
