use super::*;

/// Tests the premises officer queue.
///
/// Expected: only requests at PENDING_PREMISES
#[tokio::test]
async fn returns_premises_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::EventPermissionFactory::new(db)
        .stage(EventStage::PendingPremises)
        .build()
        .await?;
    factory::EventPermissionFactory::new(db).build().await?;

    let queue = EventPermissionRepository::new(db)
        .find_by_stage(EventStage::PendingPremises, None)
        .await?;

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].stage, EventStage::PendingPremises);

    Ok(())
}

/// Tests faculty scoping on the dean queue.
///
/// Expected: only the matching faculty's requests
#[tokio::test]
async fn scopes_dean_queue_by_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::EventPermissionFactory::new(db)
        .applicant_faculty("Engineering")
        .build()
        .await?;
    factory::EventPermissionFactory::new(db)
        .applicant_faculty("Medicine")
        .build()
        .await?;

    let queue = EventPermissionRepository::new(db)
        .find_by_stage(EventStage::PendingDean, Some("Engineering"))
        .await?;

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].applicant_faculty, "Engineering");

    Ok(())
}
