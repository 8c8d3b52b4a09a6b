use crate::server::{data::admin_user::AdminUserRepository, model::admin_user::CreateAdminUserParam};
use entity::sea_orm_active_enums::AdminRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_admin_exists;
mod create;
mod delete_by_email;
mod find_by_email;
mod toggle_active;
