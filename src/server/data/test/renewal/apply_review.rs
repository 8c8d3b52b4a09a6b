use super::*;
use chrono::Utc;

/// Tests that each review stage writes to its own comment column.
///
/// Expected: AR comment stored separately from the dean's
#[tokio::test]
async fn keeps_stage_comments_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRenewal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let renewal = factory::create_renewal(db).await?;
    let repo = RenewalRepository::new(db);

    repo.apply_review(
        renewal.id,
        ApprovalStage::PendingDean,
        ApprovalStage::PendingAr,
        Some("Dean ok".to_string()),
        None,
    )
    .await?;

    let updated = repo
        .apply_review(
            renewal.id,
            ApprovalStage::PendingAr,
            ApprovalStage::PendingVc,
            Some("AR ok".to_string()),
            None,
        )
        .await?;

    assert_eq!(updated.dean_comment.as_deref(), Some("Dean ok"));
    assert_eq!(updated.ar_comment.as_deref(), Some("AR ok"));
    assert_eq!(updated.stage, ApprovalStage::PendingVc);

    Ok(())
}

/// Tests a terminal approval stamping the decision timestamp.
///
/// Expected: stage APPROVED with decided_at set
#[tokio::test]
async fn stamps_decision_time_on_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRenewal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let renewal = factory::RenewalFactory::new(db)
        .stage(ApprovalStage::PendingVc)
        .build()
        .await?;

    let updated = RenewalRepository::new(db)
        .apply_review(
            renewal.id,
            ApprovalStage::PendingVc,
            ApprovalStage::Approved,
            None,
            Some(Utc::now()),
        )
        .await?;

    assert_eq!(updated.stage, ApprovalStage::Approved);
    assert!(updated.decided_at.is_some());

    Ok(())
}
