use super::*;

/// Tests a full reject and retry cycle on a regular quest.
///
/// Verifies accept, submit and reject, that an immediate retry is held by the cooldown,
/// and that a retry 24 hours later starts a new cycle on the same record.
///
/// Expected: final record accepted with a fresh accepted_at and no proof
#[tokio::test]
async fn reject_then_retry_after_cooldown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quest = factory::create_quest(db, GUILD).await?;
    let service = QuestService::new(db);

    let accepted = expect_accepted(
        service
            .accept_quest(&quest.quest_id, USER_ID, &[], None)
            .await
            .unwrap(),
    );
    assert_eq!(accepted.status, ProgressStatus::Accepted);

    let completed = service
        .complete_quest(
            &quest.quest_id,
            USER_ID,
            SubmitProofParams {
                proof_text: "done".to_string(),
                proof_image_urls: Vec::new(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, ProgressStatus::Completed);

    let rejected = service
        .reject_quest(&quest.quest_id, USER_ID, 42, "insufficient proof")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rejected.status, ProgressStatus::Rejected);
    assert!(rejected.approved_at.is_some());

    let retry = service
        .accept_quest(&quest.quest_id, USER_ID, &[], None)
        .await
        .unwrap();
    assert!(matches!(
        expect_denied(retry),
        AcceptDenial::Cooldown { hours_left: 24 } | AcceptDenial::Cooldown { hours_left: 23 }
    ));

    let later = Utc::now() + Duration::hours(24);
    let restarted = expect_accepted(
        service
            .accept_quest_at(&quest.quest_id, USER_ID, &[], None, later)
            .await
            .unwrap(),
    );
    assert_eq!(restarted.status, ProgressStatus::Accepted);
    assert!(restarted.accepted_at > accepted.accepted_at);
    assert!(restarted.completed_at.is_none());
    assert!(restarted.proof_text.is_empty());

    Ok(())
}
