use super::*;

/// Tests assigning a starter quest.
///
/// Verifies that a first call inserts an assigned row without an acceptance time and a
/// repeat call leaves it alone.
///
/// Expected: Ok(true), then Ok(false) with one row
#[tokio::test]
async fn inserts_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_starter_quest(db, "100", "starter1").await?;
    let repo = QuestProgressRepository::new(db);

    assert!(repo.insert_assigned("starter1", 42, 100).await?);
    assert!(!repo.insert_assigned("starter1", 42, 100).await?);

    let progress = repo.get("starter1", 42).await?.unwrap();
    assert_eq!(progress.status, ProgressStatus::Assigned);
    assert!(progress.accepted_at.is_none());
    assert_eq!(entity::prelude::QuestProgress::find().count(db).await?, 1);

    Ok(())
}

/// Tests assigning over an existing approved row.
///
/// Expected: Ok(false), row still approved
#[tokio::test]
async fn keeps_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starter = factory::create_starter_quest(db, "100", "starter1").await?;
    QuestProgressFactory::new(db, &starter, "42")
        .status("approved")
        .build()
        .await?;
    let repo = QuestProgressRepository::new(db);

    assert!(!repo.insert_assigned("starter1", 42, 100).await?);
    assert_eq!(
        repo.get("starter1", 42).await?.unwrap().status,
        ProgressStatus::Approved
    );

    Ok(())
}
