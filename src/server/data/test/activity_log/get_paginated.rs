use super::*;

/// Tests the actor and action substring filters.
///
/// Expected: totals reflect each filter independently
#[tokio::test]
async fn filters_by_actor_and_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_activity_log(db, "Society Registration Approved", "a", "Prof. Perera").await?;
    factory::create_activity_log(db, "Society Renewal Rejected", "b", "Prof. Perera").await?;
    factory::create_activity_log(db, "Admin Login", "c", "K. Silva").await?;

    let repo = ActivityLogRepository::new(db);

    let (_, by_actor) = repo
        .get_paginated(&GetActivityLogsParam {
            page: 0,
            per_page: 10,
            actor: Some("Perera".to_string()),
            action: None,
        })
        .await?;
    assert_eq!(by_actor, 2);

    let (rows, by_action) = repo
        .get_paginated(&GetActivityLogsParam {
            page: 0,
            per_page: 10,
            actor: None,
            action: Some("Renewal".to_string()),
        })
        .await?;
    assert_eq!(by_action, 1);
    assert_eq!(rows[0].action, "Society Renewal Rejected");

    Ok(())
}

/// Tests pagination bounds.
///
/// Expected: page size honored with the correct total
#[tokio::test]
async fn paginates_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..5 {
        factory::create_activity_log(db, "Admin Login", format!("login {}", i), "K. Silva").await?;
    }

    let (rows, total) = ActivityLogRepository::new(db)
        .get_paginated(&GetActivityLogsParam {
            page: 0,
            per_page: 2,
            actor: None,
            action: None,
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(rows.len(), 2);

    Ok(())
}
