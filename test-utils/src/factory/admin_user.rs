//! Admin user factory for creating test staff accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::AdminRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admin users with customizable fields.
///
/// Provides a builder pattern for creating admin user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::sea_orm_active_enums::AdminRole;
/// use test_utils::factory::admin_user::AdminUserFactory;
///
/// let dean = AdminUserFactory::new(&db)
///     .role(AdminRole::Dean)
///     .faculty("Science")
///     .build()
///     .await?;
/// ```
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    role: AdminRole,
    faculty: Option<String>,
    is_active: bool,
}

impl<'a> AdminUserFactory<'a> {
    /// Creates a new AdminUserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Admin {id}"` where id is auto-incremented
    /// - email: `"admin{id}@pdn.ac.lk"`
    /// - role: `AssistantRegistrar`
    /// - faculty: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Admin {}", id),
            email: format!("admin{}@pdn.ac.lk", id),
            role: AdminRole::AssistantRegistrar,
            faculty: None,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: AdminRole) -> Self {
        self.role = role;
        self
    }

    pub fn faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = Some(faculty.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds and inserts the admin user entity into the database.
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            faculty: ActiveValue::Set(self.faculty),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin user with default values.
pub async fn create_admin_user(db: &DatabaseConnection) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}

/// Creates an active admin user with the given role.
pub async fn create_admin_with_role(
    db: &DatabaseConnection,
    role: AdminRole,
) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).role(role).build().await
}
