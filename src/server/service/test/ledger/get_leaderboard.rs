use super::*;

/// Tests paging through a guild leaderboard.
///
/// Verifies ordering by balance descending with ties broken by user id, page totals,
/// and that other guilds are excluded.
///
/// Expected: pages [3, 1] and [2], total 3, total_pages 2
#[tokio::test]
async fn pages_by_points_then_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "1", 50).await?;
    factory::create_entry(db, "1", "2", 10).await?;
    factory::create_entry(db, "1", "3", 50).await?;
    factory::create_entry(db, "2", "4", 999).await?;

    let service = LedgerService::new(db);
    let first = service.get_leaderboard(1, 0, 2).await.unwrap();
    let second = service.get_leaderboard(1, 1, 2).await.unwrap();

    let first_ids: Vec<u64> = first.entries.iter().map(|e| e.user_id).collect();
    let second_ids: Vec<u64> = second.entries.iter().map(|e| e.user_id).collect();
    assert_eq!(first_ids, vec![1, 3]);
    assert_eq!(second_ids, vec![2]);
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!((first.page, first.per_page), (0, 2));
    assert_eq!((second.page, second.per_page), (1, 2));

    Ok(())
}

/// Tests an empty leaderboard.
///
/// Expected: no entries and zero pages
#[tokio::test]
async fn empty_guild_has_no_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let page = LedgerService::new(db).get_leaderboard(1, 0, 10).await.unwrap();

    assert!(page.entries.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}

/// Tests requesting a page size of zero.
///
/// Verifies that the page size is raised to one entry per page.
///
/// Expected: one entry, per_page 1, total_pages equal to the entry count
#[tokio::test]
async fn zero_page_size_means_one_per_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_entry(db, "1", "1", 50).await?;
    factory::create_entry(db, "1", "2", 10).await?;

    let page = LedgerService::new(db).get_leaderboard(1, 1, 0).await.unwrap();

    assert_eq!(page.per_page, 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 2);
    let ids: Vec<u64> = page.entries.iter().map(|e| e.user_id).collect();
    assert_eq!(ids, vec![2]);

    Ok(())
}
