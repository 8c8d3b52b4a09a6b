use super::*;

/// Tests resolving the most recent approved registration for a society.
///
/// Expected: the approved row with the highest year; None without approvals
#[tokio::test]
async fn returns_latest_approved_by_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::RegistrationFactory::new(db)
        .society_name("History Circle")
        .year(2024)
        .stage(ApprovalStage::Approved)
        .build()
        .await?;
    let latest = factory::RegistrationFactory::new(db)
        .society_name("History Circle")
        .year(2025)
        .stage(ApprovalStage::Approved)
        .build()
        .await?;
    factory::RegistrationFactory::new(db)
        .society_name("History Circle")
        .year(2026)
        .stage(ApprovalStage::PendingVc)
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);

    let found = repo.find_latest_approved("History Circle").await?;
    assert_eq!(found.map(|r| r.id), Some(latest.id));

    let missing = repo.find_latest_approved("Unknown Society").await?;
    assert!(missing.is_none());

    Ok(())
}
