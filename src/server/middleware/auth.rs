use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use entity::sea_orm_active_enums::AdminRole;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Access requirements checked by [`AuthGuard::require`].
pub enum Permission {
    /// The signed-in admin must hold this exact role.
    Role(AdminRole),
}

/// Resolves the signed-in admin from the session and enforces access rules.
///
/// Every authenticated endpoint goes through this guard: it loads the admin
/// row referenced by the session, rejects inactive accounts, and checks any
/// role requirements. Stage-level review rules (which role reviews which
/// request) live in the workflow services, not here.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in admin if all permissions hold.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated, active admin account
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted account
    /// - `Err(AuthError::AccountInactive)` - Account was deactivated after login
    /// - `Err(AuthError::AccessDenied)` - A required role is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::admin_user::Model, AppError> {
        let admin_repo = AdminUserRepository::new(self.db);

        let Some(admin_id) = AuthSession::new(self.session).get_admin_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(admin) = admin_repo.find_by_id(admin_id).await? else {
            return Err(AuthError::UserNotInDatabase(admin_id).into());
        };

        if !admin.is_active {
            return Err(AuthError::AccountInactive(admin.email).into());
        }

        for permission in permissions {
            match permission {
                Permission::Role(role) => {
                    if admin.role != *role {
                        return Err(AuthError::AccessDenied(
                            admin_id,
                            format!(
                                "Endpoint requires role {:?} but account holds {:?}",
                                role, admin.role
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(admin)
    }
}
