//! Admin user parameter types.

use entity::sea_orm_active_enums::AdminRole;
use sea_orm::ActiveEnum;

use crate::{model::admin::CreateAdminUserDto, server::error::AppError};

/// Parameters for creating an admin account.
#[derive(Debug, Clone)]
pub struct CreateAdminUserParam {
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub faculty: Option<String>,
}

impl CreateAdminUserParam {
    /// Converts the management DTO, parsing the role name.
    ///
    /// # Returns
    /// - `Ok(CreateAdminUserParam)` - Valid role name
    /// - `Err(AppError::BadRequest)` - Unknown role name
    pub fn from_dto(dto: CreateAdminUserDto) -> Result<Self, AppError> {
        let role = AdminRole::try_from_value(&dto.role)
            .map_err(|_| AppError::BadRequest(format!("Unknown role '{}'", dto.role)))?;

        Ok(Self {
            name: dto.name,
            email: dto.email,
            role,
            faculty: dto.faculty,
        })
    }
}
