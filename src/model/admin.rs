use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    event::{EventListItemDto, UpcomingEventDto},
    registration::RegistrationListItemDto,
    renewal::RenewalListItemDto,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Role name, e.g. `ASSISTANT_REGISTRAR`.
    pub role: String,
    pub faculty: Option<String>,
    pub is_active: bool,
}

impl AdminUserDto {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role.to_value(),
            faculty: entity.faculty,
            is_active: entity.is_active,
        }
    }
}

/// Payload for registering a new admin account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAdminUserDto {
    pub name: String,
    pub email: String,
    /// Role name, e.g. `DEAN`.
    pub role: String,
    pub faculty: Option<String>,
}

/// Role-scoped dashboard summary for the signed-in admin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub total_societies: u64,
    pub active_societies: u64,
    pub current_year_registrations: u64,
    pub current_year_renewals: u64,
    /// Requests currently waiting on the signed-in admin's role.
    pub pending_approvals: u64,
    pub upcoming_events: Vec<UpcomingEventDto>,
    pub admin: AdminUserDto,
}

/// The review queues relevant to the signed-in admin's role.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendingApprovalsDto {
    pub registrations: Vec<RegistrationListItemDto>,
    pub renewals: Vec<RenewalListItemDto>,
    pub events: Vec<EventListItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogDto {
    pub id: i32,
    pub action: String,
    pub details: String,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityLogDto {
    pub fn from_entity(entity: entity::activity_log::Model) -> Self {
        Self {
            id: entity.id,
            action: entity.action,
            details: entity.details,
            actor: entity.actor,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedActivityLogsDto {
    pub logs: Vec<ActivityLogDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Bulk email request; delivery is handled out of band, the request itself
/// is only validated and recorded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkEmailDto {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<String>,
}
