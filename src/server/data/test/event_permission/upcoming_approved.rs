use super::*;
use chrono::{Days, Utc};

/// Tests the public upcoming-events query.
///
/// Verifies that only approved future events are returned, soonest first,
/// honoring the limit.
///
/// Expected: two approved future events in date order
#[tokio::test]
async fn returns_approved_future_events_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();

    let soon = factory::EventPermissionFactory::new(db)
        .event_name("Soon")
        .event_date(today.checked_add_days(Days::new(7)).unwrap())
        .stage(EventStage::Approved)
        .build()
        .await?;
    let later = factory::EventPermissionFactory::new(db)
        .event_name("Later")
        .event_date(today.checked_add_days(Days::new(21)).unwrap())
        .stage(EventStage::Approved)
        .build()
        .await?;
    // Still pending; must not appear
    factory::EventPermissionFactory::new(db)
        .event_date(today.checked_add_days(Days::new(3)).unwrap())
        .build()
        .await?;
    // Approved but already past
    factory::EventPermissionFactory::new(db)
        .event_date(today.checked_sub_days(Days::new(3)).unwrap())
        .stage(EventStage::Approved)
        .build()
        .await?;

    let upcoming = EventPermissionRepository::new(db).upcoming_approved(10).await?;

    let ids: Vec<i32> = upcoming.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![soon.id, later.id]);

    Ok(())
}

/// Tests the limit parameter.
///
/// Expected: only the first event when limit is 1
#[tokio::test]
async fn honors_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    for offset in [5u64, 10, 15] {
        factory::EventPermissionFactory::new(db)
            .event_date(today.checked_add_days(Days::new(offset)).unwrap())
            .stage(EventStage::Approved)
            .build()
            .await?;
    }

    let upcoming = EventPermissionRepository::new(db).upcoming_approved(1).await?;

    assert_eq!(upcoming.len(), 1);

    Ok(())
}
