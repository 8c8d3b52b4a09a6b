use super::*;

/// Tests the guard with no session user.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_when_not_logged_in() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests the guard with a signed-in active admin and no role requirement.
///
/// Expected: Ok with the admin's account
#[tokio::test]
async fn returns_signed_in_admin() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin_user(db).await.unwrap();
    AuthSession::new(session).set_admin_id(admin.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert_eq!(result.unwrap().id, admin.id);
}

/// Tests that accounts deactivated after login are locked out.
///
/// Expected: Err(AccountInactive)
#[tokio::test]
async fn rejects_inactive_account() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::AdminUserFactory::new(db).inactive().build().await.unwrap();
    AuthSession::new(session).set_admin_id(admin.id).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));
}

/// Tests role enforcement for AR-only endpoints.
///
/// Expected: Err(AccessDenied) for a dean, Ok for an assistant registrar
#[tokio::test]
async fn enforces_role_permission() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Science")
        .build()
        .await
        .unwrap();
    AuthSession::new(session).set_admin_id(dean.id).await.unwrap();

    let denied = AuthGuard::new(db, session)
        .require(&[Permission::Role(AdminRole::AssistantRegistrar)])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let ar = factory::create_admin_user(db).await.unwrap();
    AuthSession::new(session).set_admin_id(ar.id).await.unwrap();

    let allowed = AuthGuard::new(db, session)
        .require(&[Permission::Role(AdminRole::AssistantRegistrar)])
        .await;
    assert!(allowed.is_ok());
}
