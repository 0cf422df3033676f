use super::*;

/// Tests approving a completed submission.
///
/// Verifies that the record becomes approved with a review time and an audit note naming
/// the approver.
///
/// Expected: Some with status approved
#[tokio::test]
async fn approves_completed_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    QuestProgressFactory::new(db, &quest, USER)
        .status("completed")
        .build()
        .await?;

    let progress = QuestService::new(db)
        .approve_quest(&quest.quest_id, USER_ID, 9)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(progress.status, ProgressStatus::Approved);
    assert!(progress.approved_at.is_some());
    assert_eq!(progress.approval_status, "Approved by 9");

    Ok(())
}

/// Tests rejecting a completed submission.
///
/// Verifies that the reason is recorded in the audit note.
///
/// Expected: Some with status rejected
#[tokio::test]
async fn rejects_completed_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    QuestProgressFactory::new(db, &quest, USER)
        .status("completed")
        .build()
        .await?;

    let progress = QuestService::new(db)
        .reject_quest(&quest.quest_id, USER_ID, 9, "blurry screenshot")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(progress.status, ProgressStatus::Rejected);
    assert!(progress.approved_at.is_some());
    assert_eq!(progress.approval_status, "Rejected by 9: blurry screenshot");

    Ok(())
}

/// Tests reviewing records that are not awaiting review.
///
/// Verifies that approve and reject both refuse accepted, approved and rejected records
/// without changing them.
///
/// Expected: None for every call, statuses unchanged
#[tokio::test]
async fn refuses_review_outside_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    let cases = [
        (1, ProgressStatus::Accepted),
        (2, ProgressStatus::Approved),
        (3, ProgressStatus::Rejected),
    ];
    for (user_id, status) in cases {
        QuestProgressFactory::new(db, &quest, user_id.to_string())
            .status(status.as_str())
            .build()
            .await?;
    }
    let service = QuestService::new(db);

    for (user_id, status) in cases {
        assert!(service
            .approve_quest(&quest.quest_id, user_id, 9)
            .await
            .unwrap()
            .is_none());
        assert!(service
            .reject_quest(&quest.quest_id, user_id, 9, "no")
            .await
            .unwrap()
            .is_none());

        let progress = service
            .get_progress(&quest.quest_id, user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(progress.status, status);
    }

    Ok(())
}

/// Tests listing submissions awaiting review.
///
/// Verifies that only completed records of the guild are returned, oldest submission
/// first.
///
/// Expected: two pending approvals in submission order
#[tokio::test]
async fn lists_pending_approvals_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    QuestProgressFactory::new(db, &quest, "2")
        .status("completed")
        .completed_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    QuestProgressFactory::new(db, &quest, "1")
        .status("completed")
        .completed_at(Utc::now() - Duration::hours(3))
        .build()
        .await?;
    QuestProgressFactory::new(db, &quest, "3")
        .status("approved")
        .build()
        .await?;

    let pending = QuestService::new(db)
        .get_pending_approvals(GUILD_ID)
        .await
        .unwrap();

    let users: Vec<u64> = pending.iter().map(|p| p.progress.user_id).collect();
    assert_eq!(users, vec![1, 2]);
    assert!(pending.iter().all(|p| p.quest.quest_id == quest.quest_id));

    Ok(())
}
