use super::*;

/// Tests storing a departure snapshot.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn stores_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leave_date = Utc::now();
    let departure = DepartedMemberRepository::new(db)
        .create(
            RecordDepartureParams {
                guild_id: 1,
                member_id: 7,
                profile: MemberProfile::new("bob", "Bob"),
                highest_role: None,
                join_date: None,
            },
            90,
            2,
            leave_date,
        )
        .await?;

    assert_eq!(departure.member_id, 7);
    assert_eq!(departure.total_points, 90);
    assert_eq!(departure.times_left, 2);
    assert_eq!(departure.display_name, "Bob");

    Ok(())
}
