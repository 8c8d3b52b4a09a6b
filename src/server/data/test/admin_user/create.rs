use super::*;

/// Tests creating a new admin account.
///
/// Verifies that the repository stores the account with the given role and
/// faculty and marks it active.
///
/// Expected: Ok with an active dean account
#[tokio::test]
async fn creates_new_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    let result = repo
        .create(CreateAdminUserParam {
            name: "Prof. N. Perera".to_string(),
            email: "dean.science@pdn.ac.lk".to_string(),
            role: AdminRole::Dean,
            faculty: Some("Science".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let admin = result.unwrap();
    assert_eq!(admin.email, "dean.science@pdn.ac.lk");
    assert_eq!(admin.role, AdminRole::Dean);
    assert_eq!(admin.faculty.as_deref(), Some("Science"));
    assert!(admin.is_active);

    Ok(())
}

/// Tests the unique constraint on the email column.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);

    repo.create(CreateAdminUserParam {
        name: "First".to_string(),
        email: "ar@pdn.ac.lk".to_string(),
        role: AdminRole::AssistantRegistrar,
        faculty: None,
    })
    .await?;

    let result = repo
        .create(CreateAdminUserParam {
            name: "Second".to_string(),
            email: "ar@pdn.ac.lk".to_string(),
            role: AdminRole::AssistantRegistrar,
            faculty: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
