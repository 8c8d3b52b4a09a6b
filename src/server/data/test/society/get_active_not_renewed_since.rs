use super::*;

/// Tests the lapse sweep query.
///
/// Verifies that only active societies whose last renewed year predates the
/// given year (or was never set) are returned.
///
/// Expected: the stale and never-renewed societies only
#[tokio::test]
async fn finds_stale_active_societies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale = factory::SocietyFactory::new(db)
        .name("Stale Society")
        .last_renewed_year(Some(2024))
        .build()
        .await?;
    let never = factory::SocietyFactory::new(db)
        .name("Never Renewed")
        .last_renewed_year(None)
        .build()
        .await?;
    factory::SocietyFactory::new(db)
        .name("Current Society")
        .last_renewed_year(Some(2026))
        .build()
        .await?;
    factory::SocietyFactory::new(db)
        .name("Already Inactive")
        .status(SocietyStatus::Inactive)
        .last_renewed_year(Some(2020))
        .build()
        .await?;

    let lapsed = SocietyRepository::new(db)
        .get_active_not_renewed_since(2026)
        .await?;

    let ids: Vec<i32> = lapsed.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&stale.id));
    assert!(ids.contains(&never.id));

    Ok(())
}
