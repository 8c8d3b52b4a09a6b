use super::*;

/// Tests removing an account by email.
///
/// Expected: Ok(true) and the account is gone
#[tokio::test]
async fn deletes_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin_user(db).await?;
    let repo = AdminUserRepository::new(db);

    let deleted = repo.delete_by_email(&admin.email).await?;

    assert!(deleted);
    assert!(repo.find_by_email(&admin.email).await?.is_none());

    Ok(())
}

/// Tests removing a non-existent account.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AdminUserRepository::new(db)
        .delete_by_email("nobody@pdn.ac.lk")
        .await?;

    assert!(!deleted);

    Ok(())
}
