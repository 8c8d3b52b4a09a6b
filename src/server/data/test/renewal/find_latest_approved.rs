use super::*;

/// Tests the latest-data lookup behind the renewal prefill endpoint.
///
/// Expected: highest approved year wins; pending renewals are ignored
#[tokio::test]
async fn prefers_latest_approved_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRenewal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::RenewalFactory::new(db)
        .society_name("Music Society")
        .year(2024)
        .stage(ApprovalStage::Approved)
        .build()
        .await?;
    let latest = factory::RenewalFactory::new(db)
        .society_name("Music Society")
        .year(2025)
        .stage(ApprovalStage::Approved)
        .build()
        .await?;
    factory::RenewalFactory::new(db)
        .society_name("Music Society")
        .year(2026)
        .build()
        .await?;

    let found = RenewalRepository::new(db)
        .find_latest_approved("Music Society")
        .await?;

    assert_eq!(found.map(|r| r.id), Some(latest.id));

    Ok(())
}

/// Tests that other societies' renewals are not picked up.
///
/// Expected: None for a society with no approved renewals
#[tokio::test]
async fn scopes_to_society_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRenewal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::RenewalFactory::new(db)
        .society_name("Other Society")
        .stage(ApprovalStage::Approved)
        .build()
        .await?;

    let found = RenewalRepository::new(db)
        .find_latest_approved("Music Society")
        .await?;

    assert!(found.is_none());

    Ok(())
}
