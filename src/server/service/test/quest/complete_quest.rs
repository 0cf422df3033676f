use super::*;

fn proof() -> SubmitProofParams {
    SubmitProofParams {
        proof_text: "done".to_string(),
        proof_image_urls: vec!["https://cdn.example.com/proof.png".to_string()],
    }
}

/// Tests submitting proof for an accepted quest.
///
/// Verifies that the record moves to completed with a completion time and the
/// submitted proof.
///
/// Expected: Some with status completed
#[tokio::test]
async fn completes_accepted_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    factory::create_progress(db, &quest, USER).await?;

    let progress = QuestService::new(db)
        .complete_quest(&quest.quest_id, USER_ID, proof())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(progress.status, ProgressStatus::Completed);
    assert!(progress.completed_at.is_some());
    assert_eq!(progress.proof_text, "done");
    assert_eq!(progress.proof_image_urls.len(), 1);

    Ok(())
}

/// Tests submitting proof for an assigned starter quest.
///
/// Verifies that the missing acceptance time is backfilled on submission.
///
/// Expected: Some with status completed and accepted_at set
#[tokio::test]
async fn backfills_accepted_at_for_assigned_quest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starter = factory::create_starter_quest(db, GUILD, "starter1").await?;
    QuestProgressFactory::new(db, &starter, USER)
        .status("assigned")
        .build()
        .await?;

    let progress = QuestService::new(db)
        .complete_quest("starter1", USER_ID, proof())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(progress.status, ProgressStatus::Completed);
    assert!(progress.accepted_at.is_some());

    Ok(())
}

/// Tests submitting proof from a state that does not allow it.
///
/// Verifies that completed, approved and rejected records are left untouched and that a
/// missing record is reported the same way.
///
/// Expected: None for every case, no mutation
#[tokio::test]
async fn ignores_submission_from_other_states() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    for (user, status) in [("1", "completed"), ("2", "approved"), ("3", "rejected")] {
        QuestProgressFactory::new(db, &quest, user)
            .status(status)
            .proof_text("original")
            .build()
            .await?;
    }
    let service = QuestService::new(db);

    for user_id in [1, 2, 3, 4] {
        let result = service
            .complete_quest(&quest.quest_id, user_id, proof())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    for user_id in [1, 2, 3] {
        let progress = service
            .get_progress(&quest.quest_id, user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(progress.proof_text, "original");
    }

    Ok(())
}
