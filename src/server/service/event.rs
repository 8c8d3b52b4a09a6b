//! Event permission workflow service.
//!
//! Event requests route Dean -> Premises Officer -> Assistant Registrar ->
//! Vice Chancellor for events held inside university premises; outside events
//! skip the premises stage. Submission validates the requesting society and
//! the event date.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::sea_orm_active_enums::{AdminRole, EventStage, SocietyStatus};

use crate::{
    model::{
        event::{
            CreateEventPermissionDto, EventListItemDto, EventPermissionDto, PaginatedEventsDto,
            UpcomingEventDto, ValidateApplicantDto,
        },
        forms::OfficeBearersDto,
    },
    server::{
        data::{
            activity_log::ActivityLogRepository, event_permission::EventPermissionRepository,
            registration::RegistrationRepository, renewal::RenewalRepository,
            society::SocietyRepository,
        },
        error::{workflow::WorkflowError, AppError},
        model::{event::GetPaginatedEventsParam, workflow},
        service::registration::{dean_faculty, require_comment, total_pages},
    },
};

pub struct EventPermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventPermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an event-permission request.
    ///
    /// The requesting society must be registered and active, and the event
    /// date must not be in the past.
    pub async fn submit(
        &self,
        dto: CreateEventPermissionDto,
    ) -> Result<EventPermissionDto, AppError> {
        let society = SocietyRepository::new(self.db)
            .find_by_name(&dto.society_name)
            .await?
            .ok_or_else(|| WorkflowError::UnknownSociety(dto.society_name.clone()))?;

        if society.status != SocietyStatus::Active {
            return Err(WorkflowError::SocietyInactive(dto.society_name).into());
        }

        if dto.event_date < Utc::now().date_naive() {
            return Err(WorkflowError::EventDateInPast.into());
        }

        let event = EventPermissionRepository::new(self.db).create(dto).await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Event Permission Requested",
                format!("{} by {} (request #{})", event.event_name, event.society_name, event.id),
                event.applicant_name.clone(),
            )
            .await?;

        Ok(EventPermissionDto::from_entity(event))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventPermissionDto>, AppError> {
        let event = EventPermissionRepository::new(self.db).get_by_id(id).await?;

        Ok(event.map(EventPermissionDto::from_entity))
    }

    /// Gets approved events from today onwards for the public landing page.
    pub async fn upcoming(&self, limit: u64) -> Result<Vec<UpcomingEventDto>, AppError> {
        let events = EventPermissionRepository::new(self.db)
            .upcoming_approved(limit)
            .await?;

        Ok(events.into_iter().map(UpcomingEventDto::from_entity).collect())
    }

    pub async fn get_paginated(
        &self,
        param: GetPaginatedEventsParam,
    ) -> Result<PaginatedEventsDto, AppError> {
        let (events, total) = EventPermissionRepository::new(self.db)
            .get_paginated(&param)
            .await?;

        Ok(PaginatedEventsDto {
            events: events.into_iter().map(EventListItemDto::from_entity).collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total_pages(total, param.per_page),
        })
    }

    /// Gets the event requests waiting on the given admin's review.
    ///
    /// Deans see only their faculty's applicants. The premises officer queue
    /// only ever contains inside-university events because outside events never
    /// enter that stage.
    pub async fn pending_for(
        &self,
        admin: &entity::admin_user::Model,
    ) -> Result<Vec<EventListItemDto>, AppError> {
        let Some(stage) = workflow::event_stage_for_role(&admin.role) else {
            return Ok(Vec::new());
        };

        let faculty = dean_faculty(admin);
        let events = EventPermissionRepository::new(self.db)
            .find_by_stage(stage, faculty.as_deref())
            .await?;

        Ok(events.into_iter().map(EventListItemDto::from_entity).collect())
    }

    /// Approves the event request at the acting admin's stage.
    pub async fn approve(
        &self,
        id: i32,
        admin: &entity::admin_user::Model,
        comment: Option<String>,
    ) -> Result<EventPermissionDto, AppError> {
        let repo = EventPermissionRepository::new(self.db);

        let event = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event permission request not found".to_string()))?;

        let review_stage = self.check_reviewable(&event, admin)?;
        let next_stage = workflow::next_event_stage(&review_stage, event.inside_university)
            .ok_or(WorkflowError::AlreadyDecided)?;

        let decided_at = (next_stage == EventStage::Approved).then(Utc::now);
        let updated = repo
            .apply_review(id, review_stage, next_stage, comment, decided_at)
            .await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Event Permission Approved",
                format!("{} (request #{})", updated.event_name, updated.id),
                admin.name.clone(),
            )
            .await?;

        Ok(EventPermissionDto::from_entity(updated))
    }

    /// Rejects the event request at the acting admin's stage; a comment is
    /// required.
    pub async fn reject(
        &self,
        id: i32,
        admin: &entity::admin_user::Model,
        comment: Option<String>,
    ) -> Result<EventPermissionDto, AppError> {
        let comment = require_comment(comment)?;
        let repo = EventPermissionRepository::new(self.db);

        let event = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event permission request not found".to_string()))?;

        let review_stage = self.check_reviewable(&event, admin)?;

        let updated = repo
            .apply_review(
                id,
                review_stage,
                EventStage::Rejected,
                Some(comment),
                Some(Utc::now()),
            )
            .await?;

        ActivityLogRepository::new(self.db)
            .log(
                "Event Permission Rejected",
                format!("{} (request #{})", updated.event_name, updated.id),
                admin.name.clone(),
            )
            .await?;

        Ok(EventPermissionDto::from_entity(updated))
    }

    /// Checks that the applicant actually holds the position they claim.
    ///
    /// Resolves the society's current office bearers from its most recent
    /// approved renewal, falling back to the approved registration for
    /// societies that have never renewed, then matches position, registration
    /// number, and email (position and email case-insensitively).
    pub async fn validate_applicant(&self, dto: &ValidateApplicantDto) -> Result<bool, AppError> {
        let bearers = match self.current_office_bearers(&dto.society_name).await? {
            Some(bearers) => bearers,
            None => return Ok(false),
        };

        let wanted = dto.position.trim().to_lowercase().replace(' ', "_");

        Ok(bearers.positions().iter().any(|(position, bearer)| {
            *position == wanted
                && bearer.reg_no == dto.reg_no
                && bearer.email.eq_ignore_ascii_case(&dto.email)
        }))
    }

    /// The office bearer block from the society's latest approved application.
    async fn current_office_bearers(
        &self,
        society_name: &str,
    ) -> Result<Option<OfficeBearersDto>, AppError> {
        let bearers_json = if let Some(renewal) = RenewalRepository::new(self.db)
            .find_latest_approved(society_name)
            .await?
        {
            Some(renewal.office_bearers)
        } else {
            RegistrationRepository::new(self.db)
                .find_latest_approved(society_name)
                .await?
                .map(|registration| registration.office_bearers)
        };

        bearers_json
            .map(|json| {
                serde_json::from_value(json).map_err(|e| {
                    AppError::InternalError(format!("Corrupted office bearer data: {}", e))
                })
            })
            .transpose()
    }

    fn check_reviewable(
        &self,
        event: &entity::event_permission::Model,
        admin: &entity::admin_user::Model,
    ) -> Result<EventStage, AppError> {
        if workflow::is_event_terminal(&event.stage) {
            return Err(WorkflowError::AlreadyDecided.into());
        }

        let review_stage =
            workflow::event_stage_for_role(&admin.role).ok_or(WorkflowError::RoleNotReviewer)?;

        if event.stage != review_stage {
            return Err(WorkflowError::StageMismatch.into());
        }

        if admin.role == AdminRole::Dean {
            let dean_faculty = admin.faculty.as_deref().unwrap_or("");
            if event.applicant_faculty != dean_faculty {
                return Err(WorkflowError::FacultyMismatch.into());
            }
        }

        Ok(review_stage)
    }
}
