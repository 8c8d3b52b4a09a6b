use super::*;
use chrono::Utc;

/// Tests recording a dean approval.
///
/// Verifies that the comment lands in the dean column, the stage advances,
/// and no decision timestamp is set for a non-terminal move.
///
/// Expected: stage PENDING_AR, dean_comment set, decided_at None
#[tokio::test]
async fn records_dean_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registration = factory::create_registration(db).await?;

    let updated = RegistrationRepository::new(db)
        .apply_review(
            registration.id,
            ApprovalStage::PendingDean,
            ApprovalStage::PendingAr,
            Some("Looks good".to_string()),
            None,
        )
        .await?;

    assert_eq!(updated.stage, ApprovalStage::PendingAr);
    assert_eq!(updated.dean_comment.as_deref(), Some("Looks good"));
    assert!(updated.ar_comment.is_none());
    assert!(updated.decided_at.is_none());

    Ok(())
}

/// Tests recording a terminal rejection at the VC stage.
///
/// Expected: stage REJECTED, vc_comment set, decided_at set
#[tokio::test]
async fn records_terminal_rejection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registration = factory::RegistrationFactory::new(db)
        .stage(ApprovalStage::PendingVc)
        .build()
        .await?;

    let updated = RegistrationRepository::new(db)
        .apply_review(
            registration.id,
            ApprovalStage::PendingVc,
            ApprovalStage::Rejected,
            Some("Constitution incomplete".to_string()),
            Some(Utc::now()),
        )
        .await?;

    assert_eq!(updated.stage, ApprovalStage::Rejected);
    assert_eq!(updated.vc_comment.as_deref(), Some("Constitution incomplete"));
    assert!(updated.decided_at.is_some());

    Ok(())
}

/// Tests reviewing a missing request.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RegistrationRepository::new(db)
        .apply_review(
            424242,
            ApprovalStage::PendingDean,
            ApprovalStage::PendingAr,
            None,
            None,
        )
        .await;

    assert!(result.is_err());
}
