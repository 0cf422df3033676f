use super::*;

/// Tests creating an onboarding record.
///
/// Expected: record with both slots filled and no mentor
#[tokio::test]
async fn creates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = WelcomeRepository::new(db)
        .upsert(
            1,
            7,
            None,
            &["starter1".to_string(), "starter2".to_string()],
        )
        .await?;

    assert_eq!(record.starter_quests(), vec!["starter1", "starter2"]);
    assert_eq!(record.mentor_id, None);

    Ok(())
}

/// Tests resetting an existing record.
///
/// Verifies that flags are cleared, the mentor is replaced and unused slots are emptied.
///
/// Expected: one slot, mentor 77, flags false
#[tokio::test]
async fn resets_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    WelcomeFactory::new(db, "1", "7")
        .starter_quests("starter1", Some("starter2"))
        .completed(true, true)
        .build()
        .await?;

    let record = WelcomeRepository::new(db)
        .upsert(1, 7, Some(77), &["starter3".to_string()])
        .await?;

    assert_eq!(record.starter_quests(), vec!["starter3"]);
    assert_eq!(record.mentor_id, Some(77));
    assert!(!record.quest_1_completed);
    assert!(!record.quest_2_completed);

    Ok(())
}
