//! Society renewal data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::sea_orm_active_enums::ApprovalStage;

use crate::server::model::{
    registration::GetPaginatedRegistrationsParam, renewal::CreateRenewalParam,
};

pub struct RenewalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RenewalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new renewal request at the dean stage.
    pub async fn create(
        &self,
        param: CreateRenewalParam,
    ) -> Result<entity::society_renewal::Model, DbErr> {
        entity::society_renewal::ActiveModel {
            society_name: ActiveValue::Set(param.society_name),
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
            previous_activities: ActiveValue::Set(param.previous_activities),
            difficulties: ActiveValue::Set(param.difficulties),
            website: ActiveValue::Set(param.website),
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
    ) -> Result<Option<entity::society_renewal::Model>, DbErr> {
        entity::prelude::SocietyRenewal::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets paginated renewals with optional year and stage filters, newest
    /// first.
    pub async fn get_paginated(
        &self,
        param: &GetPaginatedRegistrationsParam,
    ) -> Result<(Vec<entity::society_renewal::Model>, u64), DbErr> {
        let mut query = entity::prelude::SocietyRenewal::find();

        if let Some(year) = param.year {
            query = query.filter(entity::society_renewal::Column::Year.eq(year));
        }
        if let Some(stage) = &param.stage {
            query = query.filter(entity::society_renewal::Column::Stage.eq(stage.clone()));
        }

        let paginator = query
            .order_by_desc(entity::society_renewal::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let renewals = paginator.fetch_page(param.page).await?;

        Ok((renewals, total))
    }

    /// Gets all renewals waiting at the given stage, oldest first, optionally
    /// scoped to a faculty.
    pub async fn find_by_stage(
        &self,
        stage: ApprovalStage,
        faculty: Option<&str>,
    ) -> Result<Vec<entity::society_renewal::Model>, DbErr> {
        let mut query = entity::prelude::SocietyRenewal::find()
            .filter(entity::society_renewal::Column::Stage.eq(stage));

        if let Some(faculty) = faculty {
            query = query.filter(entity::society_renewal::Column::ApplicantFaculty.eq(faculty));
        }

        query
            .order_by_asc(entity::society_renewal::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts renewals waiting at the given stage, optionally scoped to a
    /// faculty.
    pub async fn count_by_stage(
        &self,
        stage: ApprovalStage,
        faculty: Option<&str>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::SocietyRenewal::find()
            .filter(entity::society_renewal::Column::Stage.eq(stage));

        if let Some(faculty) = faculty {
            query = query.filter(entity::society_renewal::Column::ApplicantFaculty.eq(faculty));
        }

        query.count(self.db).await
    }

    /// Counts renewals submitted for the given year.
    pub async fn count_by_year(&self, year: i32) -> Result<u64, DbErr> {
        entity::prelude::SocietyRenewal::find()
            .filter(entity::society_renewal::Column::Year.eq(year))
            .count(self.db)
            .await
    }

    /// Finds the most recent approved renewal for a society.
    ///
    /// Backs the "latest data" prefill when a society starts a new renewal.
    pub async fn find_latest_approved(
        &self,
        society_name: &str,
    ) -> Result<Option<entity::society_renewal::Model>, DbErr> {
        entity::prelude::SocietyRenewal::find()
            .filter(entity::society_renewal::Column::SocietyName.eq(society_name))
            .filter(entity::society_renewal::Column::Stage.eq(ApprovalStage::Approved))
            .order_by_desc(entity::society_renewal::Column::Year)
            .one(self.db)
            .await
    }

    /// Records a review decision; see
    /// [`RegistrationRepository::apply_review`](crate::server::data::registration::RegistrationRepository::apply_review).
    pub async fn apply_review(
        &self,
        id: i32,
        reviewed: ApprovalStage,
        new_stage: ApprovalStage,
        comment: Option<String>,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<entity::society_renewal::Model, DbErr> {
        let renewal = self
            .get_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Renewal {} not found", id)))?;

        let mut active_model: entity::society_renewal::ActiveModel = renewal.into();

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
