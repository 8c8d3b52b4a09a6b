use super::*;

/// Tests the stage queue without faculty scoping.
///
/// Expected: all requests at the stage, oldest first
#[tokio::test]
async fn returns_requests_at_stage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::RegistrationFactory::new(db)
        .stage(ApprovalStage::PendingAr)
        .build()
        .await?;
    factory::RegistrationFactory::new(db)
        .stage(ApprovalStage::PendingAr)
        .build()
        .await?;
    factory::RegistrationFactory::new(db)
        .stage(ApprovalStage::PendingDean)
        .build()
        .await?;

    let queue = RegistrationRepository::new(db)
        .find_by_stage(ApprovalStage::PendingAr, None)
        .await?;

    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|r| r.stage == ApprovalStage::PendingAr));

    Ok(())
}

/// Tests the faculty scoping used for dean queues.
///
/// A dean with an empty faculty string must see nothing, not everything.
///
/// Expected: only matching faculty rows; empty faculty matches none
#[tokio::test]
async fn scopes_queue_by_faculty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::RegistrationFactory::new(db)
        .applicant_faculty("Science")
        .build()
        .await?;
    factory::RegistrationFactory::new(db)
        .applicant_faculty("Arts")
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);

    let science = repo
        .find_by_stage(ApprovalStage::PendingDean, Some("Science"))
        .await?;
    assert_eq!(science.len(), 1);
    assert_eq!(science[0].applicant_faculty, "Science");

    let unscoped_dean = repo
        .find_by_stage(ApprovalStage::PendingDean, Some(""))
        .await?;
    assert!(unscoped_dean.is_empty());

    Ok(())
}
