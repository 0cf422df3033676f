use super::*;

/// Tests a departed member rejoining.
///
/// Verifies that only the most recent departure row has its counter bumped.
///
/// Expected: Ok(true), latest times_left 3
#[tokio::test]
async fn bumps_latest_departure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    DepartedMemberFactory::new(db, "1", "7")
        .leave_date(Utc::now() - Duration::days(10))
        .times_left(1)
        .build()
        .await?;
    DepartedMemberFactory::new(db, "1", "7")
        .leave_date(Utc::now() - Duration::days(2))
        .times_left(2)
        .build()
        .await?;

    let service = MemberService::new(db);
    assert!(service.record_return(1, 7).await.unwrap());

    let latest = service.latest_departure(1, 7).await.unwrap().unwrap();
    assert_eq!(latest.times_left, 3);

    Ok(())
}

/// Tests a member joining for the first time.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_first_join() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_departure(db, "2", "7", Utc::now()).await?;

    assert!(!MemberService::new(db).record_return(1, 7).await.unwrap());

    Ok(())
}
