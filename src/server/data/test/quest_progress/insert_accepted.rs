use super::*;

/// Tests inserting a first acceptance.
///
/// Expected: Ok(Some) with status accepted and the given timestamp
#[tokio::test]
async fn inserts_accepted_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = Quest::from_entity(factory::create_quest(db, "100").await?)?;
    let now = Utc::now();

    let progress = QuestProgressRepository::new(db)
        .insert_accepted(&quest, 42, Some(5), now)
        .await?
        .unwrap();

    assert_eq!(progress.status, ProgressStatus::Accepted);
    assert_eq!(progress.guild_id, 100);
    assert_eq!(progress.channel_id, Some(5));
    assert!(progress.accepted_at.is_some());
    assert!(progress.proof_image_urls.is_empty());

    Ok(())
}

/// Tests inserting an acceptance when a row already exists.
///
/// Verifies that the primary key conflict is reported as `None` and the existing row is
/// not modified.
///
/// Expected: Ok(None), row still completed
#[tokio::test]
async fn reports_conflict_as_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_quest(db, "100").await?;
    QuestProgressFactory::new(db, &model, "42")
        .status("completed")
        .build()
        .await?;
    let quest = Quest::from_entity(model)?;
    let repo = QuestProgressRepository::new(db);

    let result = repo.insert_accepted(&quest, 42, None, Utc::now()).await?;

    assert!(result.is_none());
    let existing = repo.get(&quest.quest_id, 42).await?.unwrap();
    assert_eq!(existing.status, ProgressStatus::Completed);

    Ok(())
}
