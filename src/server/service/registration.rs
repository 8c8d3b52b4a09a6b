//! Society registration workflow service.
//!
//! Handles submission and the Dean -> Assistant Registrar -> Vice Chancellor
//! review chain for new society registrations. A fully approved registration
//! creates (or reactivates) the society itself.

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use entity::sea_orm_active_enums::{AdminRole, ApprovalStage, SocietyStatus};

use crate::{
    model::registration::{
        CreateRegistrationDto, PaginatedRegistrationsDto, RegistrationDto,
        RegistrationListItemDto,
    },
    server::{
        data::{
            activity_log::ActivityLogRepository, registration::RegistrationRepository,
            society::SocietyRepository,
        },
        error::{workflow::WorkflowError, AppError},
        model::{
            registration::{CreateRegistrationParam, GetPaginatedRegistrationsParam},
            workflow,
        },
    },
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new registration application.
    ///
    /// Rejects the submission when an *active* society already carries the
    /// requested name; a lapsed (inactive) society may re-register.
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - The stored request, sitting at the dean stage
    /// - `Err(AppError::WorkflowErr(DuplicateSociety))` - Name is taken by an active society
    pub async fn submit(&self, dto: CreateRegistrationDto) -> Result<RegistrationDto, AppError> {
        let society_repo = SocietyRepository::new(self.db);

        if let Some(existing) = society_repo.find_by_name(&dto.society_name).await? {
            if existing.status == SocietyStatus::Active {
                return Err(WorkflowError::DuplicateSociety(dto.society_name).into());
            }
        }

        let param = CreateRegistrationParam::from_dto(dto, Utc::now().year())?;
        let registration = RegistrationRepository::new(self.db).create(param).await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Society Registration Submitted",
                format!(
                    "{} (application #{})",
                    registration.society_name, registration.id
                ),
                registration.applicant_full_name.clone(),
            )
            .await?;

        Self::to_dto(registration)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<RegistrationDto>, AppError> {
        let registration = RegistrationRepository::new(self.db).get_by_id(id).await?;

        registration.map(Self::to_dto).transpose()
    }

    /// Gets paginated registrations for admin listings.
    pub async fn get_paginated(
        &self,
        param: GetPaginatedRegistrationsParam,
    ) -> Result<PaginatedRegistrationsDto, AppError> {
        let (registrations, total) = RegistrationRepository::new(self.db)
            .get_paginated(&param)
            .await?;

        Ok(PaginatedRegistrationsDto {
            registrations: registrations
                .into_iter()
                .map(RegistrationListItemDto::from_entity)
                .collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total_pages(total, param.per_page),
        })
    }

    /// Gets the registrations waiting on the given admin's review.
    ///
    /// Deans see only their own faculty's applicants; a dean with no faculty
    /// configured sees an empty queue. Roles that never review registrations
    /// get an empty list.
    pub async fn pending_for(
        &self,
        admin: &entity::admin_user::Model,
    ) -> Result<Vec<RegistrationListItemDto>, AppError> {
        let Some(stage) = workflow::approval_stage_for_role(&admin.role) else {
            return Ok(Vec::new());
        };

        let faculty = dean_faculty(admin);
        let registrations = RegistrationRepository::new(self.db)
            .find_by_stage(stage, faculty.as_deref())
            .await?;

        Ok(registrations
            .into_iter()
            .map(RegistrationListItemDto::from_entity)
            .collect())
    }

    /// Approves the registration at the acting admin's stage.
    ///
    /// Advances the request along the review chain; approval at the final
    /// (vice chancellor) stage creates or reactivates the society.
    pub async fn approve(
        &self,
        id: i32,
        admin: &entity::admin_user::Model,
        comment: Option<String>,
    ) -> Result<RegistrationDto, AppError> {
        let repo = RegistrationRepository::new(self.db);

        let registration = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        let review_stage = self.check_reviewable(&registration, admin)?;
        let next_stage =
            workflow::next_approval_stage(&review_stage).ok_or(WorkflowError::AlreadyDecided)?;

        let decided_at = (next_stage == ApprovalStage::Approved).then(Utc::now);
        let updated = repo
            .apply_review(id, review_stage, next_stage.clone(), comment, decided_at)
            .await?;

        if next_stage == ApprovalStage::Approved {
            SocietyRepository::new(self.db)
                .upsert_active(
                    updated.society_name.clone(),
                    updated.aims.clone(),
                    Some(updated.applicant_faculty.clone()),
                    None,
                    updated.year,
                )
                .await?;
        }

        ActivityLogRepository::new(self.db)
            .log(
                "Society Registration Approved",
                format!("{} (application #{})", updated.society_name, updated.id),
                admin.name.clone(),
            )
            .await?;

        Self::to_dto(updated)
    }

    /// Rejects the registration at the acting admin's stage.
    ///
    /// A non-empty comment explaining the rejection is required.
    pub async fn reject(
        &self,
        id: i32,
        admin: &entity::admin_user::Model,
        comment: Option<String>,
    ) -> Result<RegistrationDto, AppError> {
        let comment = require_comment(comment)?;
        let repo = RegistrationRepository::new(self.db);

        let registration = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        let review_stage = self.check_reviewable(&registration, admin)?;

        let updated = repo
            .apply_review(
                id,
                review_stage,
                ApprovalStage::Rejected,
                Some(comment),
                Some(Utc::now()),
            )
            .await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Society Registration Rejected",
                format!("{} (application #{})", updated.society_name, updated.id),
                admin.name.clone(),
            )
            .await?;

        Self::to_dto(updated)
    }

    /// Checks that the admin may act on the request right now.
    ///
    /// # Returns
    /// - `Ok(ApprovalStage)` - The stage the admin is reviewing
    /// - `Err(WorkflowErr)` - Terminal request, wrong stage, wrong role, or
    ///   faculty mismatch for deans
    fn check_reviewable(
        &self,
        registration: &entity::society_registration::Model,
        admin: &entity::admin_user::Model,
    ) -> Result<ApprovalStage, AppError> {
        if workflow::is_approval_terminal(&registration.stage) {
            return Err(WorkflowError::AlreadyDecided.into());
        }

        let review_stage =
            workflow::approval_stage_for_role(&admin.role).ok_or(WorkflowError::RoleNotReviewer)?;

        if registration.stage != review_stage {
            return Err(WorkflowError::StageMismatch.into());
        }

        if admin.role == AdminRole::Dean {
            let dean_faculty = admin.faculty.as_deref().unwrap_or("");
            if registration.applicant_faculty != dean_faculty {
                return Err(WorkflowError::FacultyMismatch.into());
            }
        }

        Ok(review_stage)
    }

    fn to_dto(model: entity::society_registration::Model) -> Result<RegistrationDto, AppError> {
        RegistrationDto::from_entity(model)
            .map_err(|e| AppError::InternalError(format!("Corrupted registration form data: {}", e)))
    }
}

/// The faculty scope to apply for dean queries, `None` for other roles.
///
/// A dean with no faculty configured is scoped to the empty string, which
/// matches no applicants.
pub(crate) fn dean_faculty(admin: &entity::admin_user::Model) -> Option<String> {
    (admin.role == AdminRole::Dean).then(|| admin.faculty.clone().unwrap_or_default())
}

pub(crate) fn require_comment(comment: Option<String>) -> Result<String, AppError> {
    match comment {
        Some(comment) if !comment.trim().is_empty() => Ok(comment),
        _ => Err(WorkflowError::CommentRequired.into()),
    }
}

pub(crate) fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
