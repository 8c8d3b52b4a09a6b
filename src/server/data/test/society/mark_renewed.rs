use super::*;

/// Tests stamping an approved renewal year onto a society.
///
/// Expected: last_renewed_year updated and an inactive society reactivated
#[tokio::test]
async fn updates_year_and_reactivates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let society = factory::SocietyFactory::new(db)
        .status(SocietyStatus::Inactive)
        .last_renewed_year(Some(2024))
        .build()
        .await?;

    let updated = SocietyRepository::new(db)
        .mark_renewed(&society.name, 2026)
        .await?;

    assert_eq!(updated.last_renewed_year, Some(2026));
    assert_eq!(updated.status, SocietyStatus::Active);

    Ok(())
}

/// Tests renewing an unknown society.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_society() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SocietyRepository::new(db).mark_renewed("Ghost Society", 2026).await;

    assert!(result.is_err());
}
