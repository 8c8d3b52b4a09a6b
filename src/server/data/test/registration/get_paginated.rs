use super::*;
use crate::server::model::registration::GetPaginatedRegistrationsParam;

/// Tests the year and stage filters together with totals.
///
/// Expected: totals reflect the filters
#[tokio::test]
async fn filters_by_year_and_stage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::RegistrationFactory::new(db).year(2025).build().await?;
    factory::RegistrationFactory::new(db)
        .year(2026)
        .stage(ApprovalStage::Approved)
        .build()
        .await?;
    factory::RegistrationFactory::new(db).year(2026).build().await?;

    let repo = RegistrationRepository::new(db);

    let param = GetPaginatedRegistrationsParam {
        page: 0,
        per_page: 10,
        year: Some(2026),
        stage: None,
    };
    let (rows, total) = repo.get_paginated(&param).await?;
    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);

    let param = GetPaginatedRegistrationsParam {
        page: 0,
        per_page: 10,
        year: Some(2026),
        stage: Some(ApprovalStage::Approved),
    };
    let (_, approved_total) = repo.get_paginated(&param).await?;
    assert_eq!(approved_total, 1);

    Ok(())
}
