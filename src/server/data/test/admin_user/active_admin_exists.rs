use super::*;

/// Tests detecting that at least one active admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_active_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin_user(db).await?;

    let result = AdminUserRepository::new(db).active_admin_exists().await?;

    assert!(result);

    Ok(())
}

/// Tests the empty-table case that triggers the bootstrap window.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminUserRepository::new(db).active_admin_exists().await?;

    assert!(!result);

    Ok(())
}

/// Tests that deactivated accounts do not count as active admins.
///
/// Expected: Ok(false) with only an inactive account stored
#[tokio::test]
async fn ignores_inactive_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::AdminUserFactory::new(db).inactive().build().await?;

    let result = AdminUserRepository::new(db).active_admin_exists().await?;

    assert!(!result);

    Ok(())
}
