//! Administrative services: dashboards, queues, and account management.

pub mod code;

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use entity::sea_orm_active_enums::{AdminRole, ApprovalStage, EventStage, SocietyStatus};

use crate::{
    model::admin::{
        AdminUserDto, BulkEmailDto, DashboardDto, PaginatedActivityLogsDto, PendingApprovalsDto,
    },
    server::{
        data::{
            activity_log::ActivityLogRepository, admin_user::AdminUserRepository,
            event_permission::EventPermissionRepository, registration::RegistrationRepository,
            renewal::RenewalRepository, society::SocietyRepository,
        },
        error::AppError,
        model::{activity_log::GetActivityLogsParam, admin_user::CreateAdminUserParam},
        service::{
            event::EventPermissionService, registration::RegistrationService,
            renewal::RenewalService, validation::ValidationService,
        },
    },
};

/// Number of upcoming events shown on the dashboard.
const DASHBOARD_UPCOMING_EVENTS: u64 = 5;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the role-scoped dashboard for the signed-in admin.
    ///
    /// System-wide counts are the same for every role; the pending-approvals
    /// figure counts only requests currently waiting on the admin's own role
    /// (scoped to their faculty for deans, always zero for student services).
    pub async fn dashboard(
        &self,
        admin: &entity::admin_user::Model,
    ) -> Result<DashboardDto, AppError> {
        let society_repo = SocietyRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);
        let renewal_repo = RenewalRepository::new(self.db);
        let event_repo = EventPermissionRepository::new(self.db);

        let current_year = Utc::now().year();

        let total_societies = society_repo.count_all().await?;
        let active_societies = society_repo.count_by_status(SocietyStatus::Active).await?;
        let current_year_registrations = registration_repo.count_by_year(current_year).await?;
        let current_year_renewals = renewal_repo.count_by_year(current_year).await?;

        let pending_approvals = match &admin.role {
            AdminRole::Dean => {
                let faculty = admin.faculty.clone().unwrap_or_default();
                registration_repo
                    .count_by_stage(ApprovalStage::PendingDean, Some(&faculty))
                    .await?
                    + renewal_repo
                        .count_by_stage(ApprovalStage::PendingDean, Some(&faculty))
                        .await?
                    + event_repo
                        .count_by_stage(EventStage::PendingDean, Some(&faculty))
                        .await?
            }
            AdminRole::AssistantRegistrar => {
                registration_repo
                    .count_by_stage(ApprovalStage::PendingAr, None)
                    .await?
                    + renewal_repo
                        .count_by_stage(ApprovalStage::PendingAr, None)
                        .await?
                    + event_repo.count_by_stage(EventStage::PendingAr, None).await?
            }
            AdminRole::ViceChancellor => {
                registration_repo
                    .count_by_stage(ApprovalStage::PendingVc, None)
                    .await?
                    + renewal_repo
                        .count_by_stage(ApprovalStage::PendingVc, None)
                        .await?
                    + event_repo.count_by_stage(EventStage::PendingVc, None).await?
            }
            AdminRole::PremisesOfficer => {
                event_repo
                    .count_by_stage(EventStage::PendingPremises, None)
                    .await?
            }
            // Student services monitors but never reviews.
            AdminRole::StudentService => 0,
        };

        let upcoming_events = EventPermissionService::new(self.db)
            .upcoming(DASHBOARD_UPCOMING_EVENTS)
            .await?;

        Ok(DashboardDto {
            total_societies,
            active_societies,
            current_year_registrations,
            current_year_renewals,
            pending_approvals,
            upcoming_events,
            admin: AdminUserDto::from_entity(admin.clone()),
        })
    }

    /// Gets the full review queues waiting on the signed-in admin's role.
    pub async fn pending_approvals(
        &self,
        admin: &entity::admin_user::Model,
    ) -> Result<PendingApprovalsDto, AppError> {
        Ok(PendingApprovalsDto {
            registrations: RegistrationService::new(self.db).pending_for(admin).await?,
            renewals: RenewalService::new(self.db).pending_for(admin).await?,
            events: EventPermissionService::new(self.db).pending_for(admin).await?,
        })
    }

    /// Registers a new admin account.
    ///
    /// # Returns
    /// - `Ok(AdminUserDto)` - The created account
    /// - `Err(AppError::BadRequest)` - An account with this email already exists
    pub async fn create_admin_user(
        &self,
        param: CreateAdminUserParam,
        actor: &entity::admin_user::Model,
    ) -> Result<AdminUserDto, AppError> {
        let repo = AdminUserRepository::new(self.db);

        if repo.exists_by_email(&param.email).await? {
            return Err(AppError::BadRequest(
                "An admin with this email already exists".to_string(),
            ));
        }

        let created = repo.create(param).await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Admin User Added",
                format!("{} ({})", created.name, created.email),
                actor.name.clone(),
            )
            .await?;

        Ok(AdminUserDto::from_entity(created))
    }

    pub async fn get_all_admin_users(&self) -> Result<Vec<AdminUserDto>, AppError> {
        let admins = AdminUserRepository::new(self.db).get_all().await?;

        Ok(admins.into_iter().map(AdminUserDto::from_entity).collect())
    }

    /// Flips an account between active and inactive.
    pub async fn toggle_user_active(
        &self,
        id: i32,
        actor: &entity::admin_user::Model,
    ) -> Result<AdminUserDto, AppError> {
        let repo = AdminUserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Admin not found".to_string()));
        }

        let updated = repo.toggle_active(id).await?;

        ActivityLogRepository::new(self.db)
            .log(
                if updated.is_active {
                    "Admin User Activated"
                } else {
                    "Admin User Deactivated"
                },
                format!("{} ({})", updated.name, updated.email),
                actor.name.clone(),
            )
            .await?;

        Ok(AdminUserDto::from_entity(updated))
    }

    /// Removes the account with the given email.
    pub async fn remove_user(
        &self,
        email: &str,
        actor: &entity::admin_user::Model,
    ) -> Result<(), AppError> {
        let deleted = AdminUserRepository::new(self.db).delete_by_email(email).await?;

        if !deleted {
            return Err(AppError::NotFound("Admin not found".to_string()));
        }

        ActivityLogRepository::new(self.db)
            .log("Admin User Removed", email.to_string(), actor.name.clone())
            .await?;

        Ok(())
    }

    /// Gets paginated activity log entries with optional filters.
    pub async fn activity_logs(
        &self,
        param: GetActivityLogsParam,
    ) -> Result<PaginatedActivityLogsDto, AppError> {
        let (logs, total) = ActivityLogRepository::new(self.db).get_paginated(&param).await?;

        let total_pages = if param.per_page > 0 {
            total.div_ceil(param.per_page)
        } else {
            0
        };

        Ok(PaginatedActivityLogsDto {
            logs: logs
                .into_iter()
                .map(crate::model::admin::ActivityLogDto::from_entity)
                .collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Records a bulk email request.
    ///
    /// Delivery happens through the university mail system outside this
    /// backend; here the recipient list is validated and the request is
    /// written to the activity log.
    ///
    /// # Returns
    /// - `Ok(())` - Request accepted and logged
    /// - `Err(AppError::BadRequest)` - Empty recipient list or invalid addresses
    pub async fn send_bulk_email(
        &self,
        dto: BulkEmailDto,
        actor: &entity::admin_user::Model,
        validation: &ValidationService,
    ) -> Result<(), AppError> {
        if dto.recipients.is_empty() {
            return Err(AppError::BadRequest("No recipients given".to_string()));
        }

        let result = validation.validate_bulk(&dto.recipients);
        if !result.invalid.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Invalid recipient addresses: {}",
                result.invalid.join(", ")
            )));
        }

        tracing::info!(
            "Bulk email '{}' requested by {} for {} recipients",
            dto.subject,
            actor.name,
            dto.recipients.len()
        );

        ActivityLogRepository::new(self.db)
            .log(
                "Bulk Email Sent",
                format!("'{}' to {} recipients", dto.subject, dto.recipients.len()),
                actor.name.clone(),
            )
            .await?;

        Ok(())
    }
}
