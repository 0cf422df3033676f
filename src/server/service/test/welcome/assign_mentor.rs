use super::*;

/// Tests pairing an independent member with a mentor.
///
/// Verifies that the mentor is stored and unfinished starter records are removed while
/// approved ones and regular quest records are kept.
///
/// Expected: Ok(true), approved starter and regular progress remain
#[tokio::test]
async fn clears_unfinished_starters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_starter_quest(db, "1", "starter1").await?;
    let second = factory::create_starter_quest(db, "1", "starter2").await?;
    let regular = factory::create_quest(db, "1").await?;
    QuestProgressFactory::new(db, &first, "7")
        .status("approved")
        .build()
        .await?;
    QuestProgressFactory::new(db, &second, "7")
        .status("assigned")
        .build()
        .await?;
    factory::create_progress(db, &regular, "7").await?;
    factory::create_welcome(db, "1", "7", ("starter1", Some("starter2"))).await?;

    let service = WelcomeService::new(db);
    assert!(service.assign_mentor(1, 7, 77).await.unwrap());

    let record = service.get_record(1, 7).await.unwrap().unwrap();
    assert_eq!(record.mentor_id, Some(77));

    let mut remaining: Vec<String> = entity::prelude::QuestProgress::find()
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.quest_id)
        .collect();
    remaining.sort();
    let mut expected = vec!["starter1".to_string(), regular.quest_id.clone()];
    expected.sort();
    assert_eq!(remaining, expected);

    Ok(())
}

/// Tests pairing a member who was never enrolled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!WelcomeService::new(db).assign_mentor(1, 7, 77).await.unwrap());

    Ok(())
}
