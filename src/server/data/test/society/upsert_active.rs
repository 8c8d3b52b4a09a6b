use super::*;

/// Tests creating a brand-new society.
///
/// Expected: Ok with an active society carrying the registration year
#[tokio::test]
async fn creates_new_society() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SocietyRepository::new(db);
    let society = repo
        .upsert_active(
            "Rust Society".to_string(),
            "Memory safety for everyone".to_string(),
            Some("Science".to_string()),
            None,
            2026,
        )
        .await?;

    assert_eq!(society.name, "Rust Society");
    assert_eq!(society.status, SocietyStatus::Active);
    assert_eq!(society.registered_year, 2026);
    assert_eq!(society.last_renewed_year, Some(2026));

    Ok(())
}

/// Tests re-registering a lapsed society under the same name.
///
/// Verifies that the existing row is reactivated with fresh details while the
/// original registration year is preserved.
///
/// Expected: Ok with status Active, original registered_year, updated aims
#[tokio::test]
async fn reactivates_existing_society() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::SocietyFactory::new(db)
        .name("Chess Club")
        .status(SocietyStatus::Inactive)
        .registered_year(2019)
        .last_renewed_year(Some(2022))
        .build()
        .await?;

    let repo = SocietyRepository::new(db);
    let society = repo
        .upsert_active(
            "Chess Club".to_string(),
            "Play chess".to_string(),
            Some("Arts".to_string()),
            None,
            2026,
        )
        .await?;

    assert_eq!(society.id, old.id);
    assert_eq!(society.status, SocietyStatus::Active);
    assert_eq!(society.registered_year, 2019);
    assert_eq!(society.last_renewed_year, Some(2026));
    assert_eq!(society.aims, "Play chess");

    Ok(())
}
