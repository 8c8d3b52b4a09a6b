use super::*;

/// Tests flipping the active flag both ways.
///
/// Expected: active -> inactive -> active
#[tokio::test]
async fn toggles_between_states() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_user(db).await?;
    let repo = AdminUserRepository::new(db);

    let deactivated = repo.toggle_active(admin.id).await?;
    assert!(!deactivated.is_active);

    let reactivated = repo.toggle_active(admin.id).await?;
    assert!(reactivated.is_active);

    Ok(())
}

/// Tests toggling a missing account.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminUserRepository::new(db).toggle_active(9999).await;

    assert!(result.is_err());
}
