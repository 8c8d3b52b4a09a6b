//! Admin user data repository for database operations.
//!
//! This module provides the `AdminUserRepository` for managing staff accounts in the
//! database: creation, identity lookup during OAuth binding, activation toggling, and
//! removal.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::admin_user::CreateAdminUserParam;

/// Repository providing database operations for admin account management.
pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new active admin account.
    ///
    /// # Arguments
    /// - `param` - Account details including role and optional faculty
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(
        &self,
        param: CreateAdminUserParam,
    ) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            role: ActiveValue::Set(param.role),
            faculty: ActiveValue::Set(param.faculty),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an admin account by email address.
    ///
    /// This is the identity-binding lookup used during the OAuth callback: the
    /// authenticated Google email must resolve to a row here.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find_by_id(id).one(self.db).await
    }

    /// Checks whether an account with the given email already exists.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any active admin accounts exist.
    ///
    /// Used during startup to decide whether to open the one-time bootstrap
    /// login window.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one active admin exists
    /// - `Ok(false)` - No active admins (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn active_admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::IsActive.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all admin accounts, ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .order_by_asc(entity::admin_user::Column::Name)
            .all(self.db)
            .await
    }

    /// Flips the active flag on an account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated account
    /// - `Err(DbErr::RecordNotFound)` - No account with that id
    pub async fn toggle_active(&self, id: i32) -> Result<entity::admin_user::Model, DbErr> {
        let admin = entity::prelude::AdminUser::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Admin {} not found", id)))?;

        let is_active = admin.is_active;
        let mut active_model: entity::admin_user::ActiveModel = admin.into();
        active_model.is_active = ActiveValue::Set(!is_active);

        active_model.update(self.db).await
    }

    /// Deletes the account with the given email.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that email
    pub async fn delete_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AdminUser::delete_many()
            .filter(entity::admin_user::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
