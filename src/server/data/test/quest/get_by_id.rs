use super::*;

/// Tests fetching a quest stored with the legacy `starter` rank.
///
/// Verifies that the rank is read as normal.
///
/// Expected: Ok(Some) with rank Normal
#[tokio::test]
async fn reads_starter_rank_as_normal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_starter_quest(db, "100", "starter1").await?;

    let quest = QuestRepository::new(db).get_by_id("starter1").await?.unwrap();

    assert_eq!(quest.rank, QuestRank::Normal);
    assert!(quest.is_starter());

    Ok(())
}

/// Tests fetching a quest with an unknown status.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = QuestFactory::new(db, "100").status("archived").build().await?;

    let result = QuestRepository::new(db).get_by_id(&quest.quest_id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests fetching a quest that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(QuestRepository::new(db).get_by_id("missing1").await?.is_none());

    Ok(())
}
