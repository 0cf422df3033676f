use super::*;

/// Tests fetching several quests at once.
///
/// Verifies that only existing ids are returned and an empty id list short-circuits.
///
/// Expected: two quests, then none
#[tokio::test]
async fn fetches_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_starter_quest(db, "100", "starter1").await?;
    factory::create_starter_quest(db, "100", "starter2").await?;
    let repo = QuestRepository::new(db);

    let quests = repo.get_by_ids(&["starter1", "starter2", "starter9"]).await?;
    let empty = repo.get_by_ids(&[]).await?;

    assert_eq!(quests.len(), 2);
    assert!(empty.is_empty());

    Ok(())
}
