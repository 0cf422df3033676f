use super::*;

/// Tests the clamped update for positive and negative deltas.
///
/// Expected: 30 + 20 = 50, then 50 - 80 floors at 0
#[tokio::test]
async fn clamps_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "7", 30).await?;
    let repo = LeaderboardRepository::new(db);
    let profile = MemberProfile::new("bob", "Bob");

    let raised = repo.adjust_points(1, 7, 20, &profile).await?;
    let lowered = repo.adjust_points(1, 7, -80, &profile).await?;

    assert_eq!(raised.points, 50);
    assert_eq!(lowered.points, 0);

    Ok(())
}

/// Tests that adjustments do not maintain the lifetime counter.
///
/// Expected: total_points_earned unchanged
#[tokio::test]
async fn leaves_lifetime_counter_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    LeaderboardFactory::new(db, "1", "7")
        .points(10)
        .total_points_earned(500)
        .build()
        .await?;

    let entry = LeaderboardRepository::new(db)
        .adjust_points(1, 7, 5, &MemberProfile::new("bob", "Bob"))
        .await?;

    assert_eq!(entry.points, 15);
    assert_eq!(entry.total_points_earned, 500);

    Ok(())
}

/// Tests the clamped update at the top of the balance range.
///
/// Verifies that a grant past the column maximum is capped in the same statement, so the
/// stored row still decodes and later deductions start from the cap.
///
/// Expected: 30 + i32::MAX caps at i32::MAX, then i32::MAX + i32::MIN floors at 0
#[tokio::test]
async fn caps_at_column_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "7", 30).await?;
    let repo = LeaderboardRepository::new(db);
    let profile = MemberProfile::new("bob", "Bob");

    let capped = repo.adjust_points(1, 7, i32::MAX, &profile).await?;
    assert_eq!(capped.points, i32::MAX);

    let again = repo.adjust_points(1, 7, 1, &profile).await?;
    assert_eq!(again.points, i32::MAX);

    let stored = repo.get(1, 7).await?.unwrap();
    assert_eq!(stored.points, i32::MAX);

    let drained = repo.adjust_points(1, 7, i32::MIN, &profile).await?;
    assert_eq!(drained.points, 0);

    Ok(())
}
