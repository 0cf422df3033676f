use super::*;

/// Tests clearing a member's starter rows while keeping approved ones.
///
/// Verifies that only non-approved starter rows of that member in that guild are
/// deleted.
///
/// Expected: Ok(1); approved starter, regular row and other member's row remain
#[tokio::test]
async fn keeps_approved_starters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_starter_quest(db, "100", "starter1").await?;
    let second = factory::create_starter_quest(db, "100", "starter2").await?;
    let regular = factory::create_quest(db, "100").await?;
    QuestProgressFactory::new(db, &first, "42")
        .status("approved")
        .build()
        .await?;
    QuestProgressFactory::new(db, &second, "42")
        .status("assigned")
        .build()
        .await?;
    factory::create_progress(db, &regular, "42").await?;
    QuestProgressFactory::new(db, &second, "43")
        .status("assigned")
        .build()
        .await?;

    let deleted = QuestProgressRepository::new(db)
        .delete_starters_for_user(42, 100, true)
        .await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::QuestProgress::find().count(db).await?, 3);

    Ok(())
}

/// Tests clearing every starter row of a member.
///
/// Expected: Ok(2)
#[tokio::test]
async fn deletes_all_starters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_starter_quest(db, "100", "starter1").await?;
    let second = factory::create_starter_quest(db, "100", "starter2").await?;
    QuestProgressFactory::new(db, &first, "42")
        .status("approved")
        .build()
        .await?;
    QuestProgressFactory::new(db, &second, "42")
        .status("rejected")
        .build()
        .await?;

    let deleted = QuestProgressRepository::new(db)
        .delete_starters_for_user(42, 100, false)
        .await?;

    assert_eq!(deleted, 2);

    Ok(())
}
