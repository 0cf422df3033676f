use super::*;

/// Tests a deduction larger than the balance.
///
/// Verifies that deducting 100 from a balance of 30 floors the balance at zero.
///
/// Expected: Ok with points 0
#[tokio::test]
async fn floors_balance_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "7", 30).await?;

    let entry = LedgerService::new(db)
        .adjust_points(1, 7, -100, &bob())
        .await
        .unwrap();

    assert_eq!(entry.points, 0);
    assert_eq!(entry.display_name, "Bob");

    Ok(())
}

/// Tests a sequence of mixed adjustments.
///
/// Verifies that every step applies `max(0, points + delta)` and never goes negative.
///
/// Expected: balance follows the clamped running sum
#[tokio::test]
async fn never_goes_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LedgerService::new(db);
    let mut expected = 0;
    for delta in [5, -10, 20, -3, -50, 100, -99, 1] {
        expected = (expected + delta).max(0);
        let entry = service.adjust_points(1, 7, delta, &bob()).await.unwrap();
        assert!(entry.points >= 0);
        assert_eq!(entry.points, expected);
    }

    Ok(())
}

/// Tests adjusting a member with no entry.
///
/// Verifies that the entry is created before the delta is applied.
///
/// Expected: Ok with points 15
#[tokio::test]
async fn creates_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = LedgerService::new(db)
        .adjust_points(1, 7, 15, &bob())
        .await
        .unwrap();

    assert_eq!(entry.points, 15);
    assert_eq!(entry.username, "bob");

    Ok(())
}

/// Tests concurrent grants to the same member.
///
/// Verifies that both grants apply.
///
/// Expected: Ok with points 20
#[tokio::test]
async fn concurrent_grants_both_apply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "7", 0).await?;
    let service = LedgerService::new(db);
    let profile = bob();

    let (first, second) = tokio::join!(
        service.adjust_points(1, 7, 10, &profile),
        service.adjust_points(1, 7, 10, &profile),
    );
    first.unwrap();
    second.unwrap();

    let entry = service.get_entry(1, 7).await.unwrap().unwrap();
    assert_eq!(entry.points, 20);

    Ok(())
}

/// Tests overwriting a balance.
///
/// Verifies that the exact value replaces the balance and a negative value is stored as
/// zero.
///
/// Expected: 250, then 0
#[tokio::test]
async fn sets_exact_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "7", 30).await?;
    let service = LedgerService::new(db);

    let entry = service.set_exact_points(1, 7, 250, &bob()).await.unwrap();
    assert_eq!(entry.points, 250);

    let entry = service.set_exact_points(1, 7, -5, &bob()).await.unwrap();
    assert_eq!(entry.points, 0);

    Ok(())
}

/// Tests adding an existing member.
///
/// Verifies that names are refreshed and the balance is kept.
///
/// Expected: points 30 with the new display name
#[tokio::test]
async fn add_member_keeps_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "7", 30).await?;
    let service = LedgerService::new(db);

    service
        .add_member(1, 7, &MemberProfile::new("bob", "Bobby"))
        .await
        .unwrap();

    let entry = service.get_entry(1, 7).await.unwrap().unwrap();
    assert_eq!(entry.points, 30);
    assert_eq!(entry.display_name, "Bobby");

    assert!(service.remove_member(1, 7).await.unwrap());
    assert!(service.get_entry(1, 7).await.unwrap().is_none());
    assert!(!service.remove_member(1, 7).await.unwrap());

    Ok(())
}
