//! Society renewal workflow service.
//!
//! Renewals follow the same Dean -> Assistant Registrar -> Vice Chancellor
//! chain as registrations, but must reference an already-registered society.
//! Final approval stamps the renewal year onto the society and reactivates a
//! lapsed one.

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use entity::sea_orm_active_enums::{AdminRole, ApprovalStage};

use crate::{
    model::renewal::{CreateRenewalDto, PaginatedRenewalsDto, RenewalDto, RenewalListItemDto},
    server::{
        data::{
            activity_log::ActivityLogRepository, renewal::RenewalRepository,
            society::SocietyRepository,
        },
        error::{workflow::WorkflowError, AppError},
        model::{
            registration::GetPaginatedRegistrationsParam, renewal::CreateRenewalParam, workflow,
        },
        service::registration::{dean_faculty, require_comment, total_pages},
    },
};

pub struct RenewalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RenewalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a renewal application for an existing society.
    ///
    /// The society must already be registered; lapsed (inactive) societies may
    /// renew, and final approval reactivates them.
    ///
    /// # Returns
    /// - `Ok(RenewalDto)` - The stored request, sitting at the dean stage
    /// - `Err(AppError::WorkflowErr(UnknownSociety))` - No society with that name
    pub async fn submit(&self, dto: CreateRenewalDto) -> Result<RenewalDto, AppError> {
        let society_repo = SocietyRepository::new(self.db);

        if society_repo.find_by_name(&dto.society_name).await?.is_none() {
            return Err(WorkflowError::UnknownSociety(dto.society_name).into());
        }

        let param = CreateRenewalParam::from_dto(dto, Utc::now().year())?;
        let renewal = RenewalRepository::new(self.db).create(param).await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Society Renewal Submitted",
                format!("{} (application #{})", renewal.society_name, renewal.id),
                renewal.applicant_full_name.clone(),
            )
            .await?;

        Self::to_dto(renewal)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<RenewalDto>, AppError> {
        let renewal = RenewalRepository::new(self.db).get_by_id(id).await?;

        renewal.map(Self::to_dto).transpose()
    }

    /// Gets the most recent approved renewal for a society.
    ///
    /// Backs the renewal form prefill; returns the full application so the
    /// frontend can reuse last year's officials and member lists.
    pub async fn latest_approved(&self, society_name: &str) -> Result<Option<RenewalDto>, AppError> {
        let renewal = RenewalRepository::new(self.db)
            .find_latest_approved(society_name)
            .await?;

        renewal.map(Self::to_dto).transpose()
    }

    pub async fn get_paginated(
        &self,
        param: GetPaginatedRegistrationsParam,
    ) -> Result<PaginatedRenewalsDto, AppError> {
        let (renewals, total) = RenewalRepository::new(self.db).get_paginated(&param).await?;

        Ok(PaginatedRenewalsDto {
            renewals: renewals
                .into_iter()
                .map(RenewalListItemDto::from_entity)
                .collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total_pages(total, param.per_page),
        })
    }

    /// Gets the renewals waiting on the given admin's review.
    ///
    /// Same scoping rules as registrations: deans see their faculty only.
    pub async fn pending_for(
        &self,
        admin: &entity::admin_user::Model,
    ) -> Result<Vec<RenewalListItemDto>, AppError> {
        let Some(stage) = workflow::approval_stage_for_role(&admin.role) else {
            return Ok(Vec::new());
        };

        let faculty = dean_faculty(admin);
        let renewals = RenewalRepository::new(self.db)
            .find_by_stage(stage, faculty.as_deref())
            .await?;

        Ok(renewals
            .into_iter()
            .map(RenewalListItemDto::from_entity)
            .collect())
    }

    /// Approves the renewal at the acting admin's stage.
    ///
    /// Approval at the final (vice chancellor) stage stamps the renewal year
    /// onto the society and reactivates it if it had lapsed.
    pub async fn approve(
        &self,
        id: i32,
        admin: &entity::admin_user::Model,
        comment: Option<String>,
    ) -> Result<RenewalDto, AppError> {
        let repo = RenewalRepository::new(self.db);

        let renewal = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Renewal not found".to_string()))?;

        let review_stage = self.check_reviewable(&renewal, admin)?;
        let next_stage =
            workflow::next_approval_stage(&review_stage).ok_or(WorkflowError::AlreadyDecided)?;

        let decided_at = (next_stage == ApprovalStage::Approved).then(Utc::now);
        let updated = repo
            .apply_review(id, review_stage, next_stage.clone(), comment, decided_at)
            .await?;

        if next_stage == ApprovalStage::Approved {
            SocietyRepository::new(self.db)
                .mark_renewed(&updated.society_name, updated.year)
                .await?;
        }

        ActivityLogRepository::new(self.db)
            .log(
                "Society Renewal Approved",
                format!("{} (application #{})", updated.society_name, updated.id),
                admin.name.clone(),
            )
            .await?;

        Self::to_dto(updated)
    }

    /// Rejects the renewal at the acting admin's stage; a comment is required.
    pub async fn reject(
        &self,
        id: i32,
        admin: &entity::admin_user::Model,
        comment: Option<String>,
    ) -> Result<RenewalDto, AppError> {
        let comment = require_comment(comment)?;
        let repo = RenewalRepository::new(self.db);

        let renewal = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Renewal not found".to_string()))?;

        let review_stage = self.check_reviewable(&renewal, admin)?;

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
                "Society Renewal Rejected",
                format!("{} (application #{})", updated.society_name, updated.id),
                admin.name.clone(),
            )
            .await?;

        Self::to_dto(updated)
    }

    fn check_reviewable(
        &self,
        renewal: &entity::society_renewal::Model,
        admin: &entity::admin_user::Model,
    ) -> Result<ApprovalStage, AppError> {
        if workflow::is_approval_terminal(&renewal.stage) {
            return Err(WorkflowError::AlreadyDecided.into());
        }

        let review_stage =
            workflow::approval_stage_for_role(&admin.role).ok_or(WorkflowError::RoleNotReviewer)?;

        if renewal.stage != review_stage {
            return Err(WorkflowError::StageMismatch.into());
        }

        if admin.role == AdminRole::Dean {
            let dean_faculty = admin.faculty.as_deref().unwrap_or("");
            if renewal.applicant_faculty != dean_faculty {
                return Err(WorkflowError::FacultyMismatch.into());
            }
        }

        Ok(review_stage)
    }

    fn to_dto(model: entity::society_renewal::Model) -> Result<RenewalDto, AppError> {
        RenewalDto::from_entity(model)
            .map_err(|e| AppError::InternalError(format!("Corrupted renewal form data: {}", e)))
    }
}
