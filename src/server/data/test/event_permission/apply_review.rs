use super::*;
use chrono::Utc;

/// Tests that the premises review writes to the premises comment column.
///
/// Expected: premises_comment set, stage advanced to PENDING_AR
#[tokio::test]
async fn records_premises_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::EventPermissionFactory::new(db)
        .stage(EventStage::PendingPremises)
        .build()
        .await?;

    let updated = EventPermissionRepository::new(db)
        .apply_review(
            event.id,
            EventStage::PendingPremises,
            EventStage::PendingAr,
            Some("Hall available".to_string()),
            None,
        )
        .await?;

    assert_eq!(updated.stage, EventStage::PendingAr);
    assert_eq!(updated.premises_comment.as_deref(), Some("Hall available"));
    assert!(updated.dean_comment.is_none());

    Ok(())
}

/// Tests a terminal rejection at the dean stage.
///
/// Expected: stage REJECTED, dean_comment and decided_at set
#[tokio::test]
async fn records_dean_rejection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventPermission)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event_permission(db).await?;

    let updated = EventPermissionRepository::new(db)
        .apply_review(
            event.id,
            EventStage::PendingDean,
            EventStage::Rejected,
            Some("Clashes with exams".to_string()),
            Some(Utc::now()),
        )
        .await?;

    assert_eq!(updated.stage, EventStage::Rejected);
    assert_eq!(updated.dean_comment.as_deref(), Some("Clashes with exams"));
    assert!(updated.decided_at.is_some());

    Ok(())
}
