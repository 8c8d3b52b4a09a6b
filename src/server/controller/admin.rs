use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use entity::sea_orm_active_enums::AdminRole;

use crate::{
    model::{
        admin::{BulkEmailDto, CreateAdminUserDto},
        api::MessageDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{activity_log::GetActivityLogsParam, admin_user::CreateAdminUserParam},
        service::{admin::AdminService, validation::ValidationService},
        state::AppState,
    },
};

fn default_per_page() -> u64 {
    20
}

#[derive(Deserialize)]
pub struct ActivityLogQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Substring filter on the acting user's name.
    pub user: Option<String>,
    /// Substring filter on the action name.
    pub action: Option<String>,
}

#[derive(Deserialize)]
pub struct RemoveUserQuery {
    pub email: String,
}

/// GET /api/admin/dashboard - Role-scoped dashboard for the signed-in admin.
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dashboard = AdminService::new(&state.db).dashboard(&admin).await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// GET /api/admin/pending-approvals - Review queues for the signed-in admin's
/// role.
pub async fn get_pending_approvals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let pending = AdminService::new(&state.db).pending_approvals(&admin).await?;

    Ok((StatusCode::OK, Json(pending)))
}

/// GET /api/admin/activity-logs - Paginated audit trail with optional filters.
pub async fn get_activity_logs(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ActivityLogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = GetActivityLogsParam {
        page: query.page,
        per_page: query.per_page,
        actor: query.user,
        action: query.action,
    };
    let logs = AdminService::new(&state.db).activity_logs(param).await?;

    Ok((StatusCode::OK, Json(logs)))
}

/// POST /api/admin/send-email - Record a bulk email request.
///
/// Delivery is handled by the university mail system; this endpoint validates
/// the recipient list and records the request in the activity log.
pub async fn send_bulk_email(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let validation = ValidationService::new(state.university_email_domain.clone());
    AdminService::new(&state.db)
        .send_bulk_email(payload, &admin, &validation)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Bulk email request recorded".to_string(),
        }),
    ))
}

/// POST /api/admin/users - Register a new admin account.
///
/// # Access Control
/// - Assistant Registrar only
pub async fn add_admin_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdminUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(AdminRole::AssistantRegistrar)])
        .await?;

    let param = CreateAdminUserParam::from_dto(payload)?;
    let created = AdminService::new(&state.db).create_admin_user(param, &admin).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/admin/users - All admin accounts.
///
/// # Access Control
/// - Assistant Registrar only
pub async fn get_admin_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(AdminRole::AssistantRegistrar)])
        .await?;

    let admins = AdminService::new(&state.db).get_all_admin_users().await?;

    Ok((StatusCode::OK, Json(admins)))
}

/// POST /api/admin/users/{id}/toggle-active - Activate or deactivate an
/// account.
///
/// # Access Control
/// - Assistant Registrar only
pub async fn toggle_admin_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(AdminRole::AssistantRegistrar)])
        .await?;

    let updated = AdminService::new(&state.db).toggle_user_active(id, &admin).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /api/admin/users?email= - Remove an admin account.
///
/// # Access Control
/// - Assistant Registrar only
pub async fn remove_admin_user(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RemoveUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(AdminRole::AssistantRegistrar)])
        .await?;

    AdminService::new(&state.db).remove_user(&query.email, &admin).await?;

    Ok(StatusCode::NO_CONTENT)
}
