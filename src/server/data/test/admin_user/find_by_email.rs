use super::*;

/// Tests the identity-binding lookup by email.
///
/// Expected: Ok(Some) for a stored account, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::AdminUserFactory::new(db)
        .email("vc@pdn.ac.lk")
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);

    let found = repo.find_by_email("vc@pdn.ac.lk").await?;
    assert_eq!(found.map(|a| a.id), Some(admin.id));

    let missing = repo.find_by_email("nobody@pdn.ac.lk").await?;
    assert!(missing.is_none());

    Ok(())
}
