//! Society registration data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::sea_orm_active_enums::ApprovalStage;

use crate::server::model::registration::{CreateRegistrationParam, GetPaginatedRegistrationsParam};

pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new registration request at the dean stage.
    ///
    /// # Arguments
    /// - `param` - Registration details with form blocks already serialized
    ///
    /// # Returns
    /// - `Ok(Model)` - The created request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateRegistrationParam,
    ) -> Result<entity::society_registration::Model, DbErr> {
        entity::society_registration::ActiveModel {
            society_name: ActiveValue::Set(param.society_name),
            aims: ActiveValue::Set(param.aims),
            applicant_full_name: ActiveValue::Set(param.applicant_full_name),
            applicant_reg_no: ActiveValue::Set(param.applicant_reg_no),
            applicant_email: ActiveValue::Set(param.applicant_email),
            applicant_faculty: ActiveValue::Set(param.applicant_faculty),
            applicant_mobile: ActiveValue::Set(param.applicant_mobile),
            agm_date: ActiveValue::Set(param.agm_date),
            bank_name: ActiveValue::Set(param.bank_name),
            bank_account: ActiveValue::Set(param.bank_account),
            senior_treasurer: ActiveValue::Set(param.senior_treasurer),
            office_bearers: ActiveValue::Set(param.office_bearers),
            advisory_board: ActiveValue::Set(param.advisory_board),
            committee_members: ActiveValue::Set(param.committee_members),
            members: ActiveValue::Set(param.members),
            planned_events: ActiveValue::Set(param.planned_events),
            year: ActiveValue::Set(param.year),
            stage: ActiveValue::Set(ApprovalStage::PendingDean),
            dean_comment: ActiveValue::Set(None),
            ar_comment: ActiveValue::Set(None),
            vc_comment: ActiveValue::Set(None),
            decided_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::society_registration::Model>, DbErr> {
        entity::prelude::SocietyRegistration::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets paginated registrations with optional year and stage filters,
    /// newest first.
    ///
    /// # Returns
    /// - `Ok((registrations, total))` - Page of requests and total matching rows
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        param: &GetPaginatedRegistrationsParam,
    ) -> Result<(Vec<entity::society_registration::Model>, u64), DbErr> {
        let mut query = entity::prelude::SocietyRegistration::find();

        if let Some(year) = param.year {
            query = query.filter(entity::society_registration::Column::Year.eq(year));
        }
        if let Some(stage) = &param.stage {
            query = query.filter(entity::society_registration::Column::Stage.eq(stage.clone()));
        }

        let paginator = query
            .order_by_desc(entity::society_registration::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let registrations = paginator.fetch_page(param.page).await?;

        Ok((registrations, total))
    }

    /// Gets all registrations waiting at the given stage, oldest first.
    ///
    /// An optional faculty restricts the queue to matching applicants; deans
    /// are scoped this way.
    pub async fn find_by_stage(
        &self,
        stage: ApprovalStage,
        faculty: Option<&str>,
    ) -> Result<Vec<entity::society_registration::Model>, DbErr> {
        let mut query = entity::prelude::SocietyRegistration::find()
            .filter(entity::society_registration::Column::Stage.eq(stage));

        if let Some(faculty) = faculty {
            query =
                query.filter(entity::society_registration::Column::ApplicantFaculty.eq(faculty));
        }

        query
            .order_by_asc(entity::society_registration::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts registrations waiting at the given stage, optionally scoped to a
    /// faculty.
    pub async fn count_by_stage(
        &self,
        stage: ApprovalStage,
        faculty: Option<&str>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::SocietyRegistration::find()
            .filter(entity::society_registration::Column::Stage.eq(stage));

        if let Some(faculty) = faculty {
            query =
                query.filter(entity::society_registration::Column::ApplicantFaculty.eq(faculty));
        }

        query.count(self.db).await
    }

    /// Finds the most recent approved registration for a society.
    ///
    /// Used to resolve current office bearers when the society has never been
    /// renewed.
    pub async fn find_latest_approved(
        &self,
        society_name: &str,
    ) -> Result<Option<entity::society_registration::Model>, DbErr> {
        entity::prelude::SocietyRegistration::find()
            .filter(entity::society_registration::Column::SocietyName.eq(society_name))
            .filter(entity::society_registration::Column::Stage.eq(ApprovalStage::Approved))
            .order_by_desc(entity::society_registration::Column::Year)
            .one(self.db)
            .await
    }

    /// Counts registrations submitted for the given year.
    pub async fn count_by_year(&self, year: i32) -> Result<u64, DbErr> {
        entity::prelude::SocietyRegistration::find()
            .filter(entity::society_registration::Column::Year.eq(year))
            .count(self.db)
            .await
    }

    /// Records a review decision.
    ///
    /// Stores the reviewer's comment against the stage that was reviewed, moves
    /// the request to `new_stage`, and stamps `decided_at` when the decision is
    /// terminal.
    ///
    /// # Arguments
    /// - `id` - Request id
    /// - `reviewed` - The stage that was just reviewed (selects the comment column)
    /// - `new_stage` - Stage the request moves to
    /// - `comment` - Optional reviewer comment
    /// - `decided_at` - Set when `new_stage` is terminal
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated request
    /// - `Err(DbErr::RecordNotFound)` - No request with that id
    pub async fn apply_review(
        &self,
        id: i32,
        reviewed: ApprovalStage,
        new_stage: ApprovalStage,
        comment: Option<String>,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<entity::society_registration::Model, DbErr> {
        let registration = self
            .get_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Registration {} not found",
                id
            )))?;

        let mut active_model: entity::society_registration::ActiveModel = registration.into();

        match reviewed {
            ApprovalStage::PendingDean => active_model.dean_comment = ActiveValue::Set(comment),
            ApprovalStage::PendingAr => active_model.ar_comment = ActiveValue::Set(comment),
            ApprovalStage::PendingVc => active_model.vc_comment = ActiveValue::Set(comment),
            ApprovalStage::Approved | ApprovalStage::Rejected => {}
        }

        active_model.stage = ActiveValue::Set(new_stage);
        if decided_at.is_some() {
            active_model.decided_at = ActiveValue::Set(decided_at);
        }

        active_model.update(self.db).await
    }
}
