use super::*;

/// Tests the name search filter.
///
/// Expected: only societies whose name contains the search string
#[tokio::test]
async fn filters_by_name_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::SocietyFactory::new(db).name("Astronomy Circle").build().await?;
    factory::SocietyFactory::new(db).name("Drama Circle").build().await?;
    factory::SocietyFactory::new(db).name("Robotics Union").build().await?;

    let (societies, total) = SocietyRepository::new(db)
        .get_paginated(Some("Circle"), None, None, 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert!(societies.iter().all(|s| s.name.contains("Circle")));

    Ok(())
}

/// Tests combining status and year filters with pagination.
///
/// Expected: totals reflect the filters; page size is honored
#[tokio::test]
async fn filters_by_status_and_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Society)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..3 {
        factory::SocietyFactory::new(db)
            .name(format!("Active {}", i))
            .registered_year(2025)
            .build()
            .await?;
    }
    factory::SocietyFactory::new(db)
        .name("Old Inactive")
        .status(SocietyStatus::Inactive)
        .registered_year(2025)
        .build()
        .await?;

    let repo = SocietyRepository::new(db);

    let (_, active_total) = repo
        .get_paginated(None, Some(SocietyStatus::Active), Some(2025), 0, 2)
        .await?;
    assert_eq!(active_total, 3);

    let (first_page, _) = repo
        .get_paginated(None, Some(SocietyStatus::Active), Some(2025), 0, 2)
        .await?;
    assert_eq!(first_page.len(), 2);

    let (_, inactive_total) = repo
        .get_paginated(None, Some(SocietyStatus::Inactive), None, 0, 10)
        .await?;
    assert_eq!(inactive_total, 1);

    Ok(())
}
