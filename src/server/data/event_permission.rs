//! Event permission data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use entity::sea_orm_active_enums::EventStage;

use crate::{
    model::event::CreateEventPermissionDto, server::model::event::GetPaginatedEventsParam,
};

pub struct EventPermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventPermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event-permission request at the dean stage.
    ///
    /// The request DTO maps onto the table column-for-column, so it is stored
    /// directly without an intermediate parameter model.
    pub async fn create(
        &self,
        dto: CreateEventPermissionDto,
    ) -> Result<entity::event_permission::Model, DbErr> {
        entity::event_permission::ActiveModel {
            society_name: ActiveValue::Set(dto.society_name),
            applicant_name: ActiveValue::Set(dto.applicant_name),
            applicant_reg_no: ActiveValue::Set(dto.applicant_reg_no),
            applicant_email: ActiveValue::Set(dto.applicant_email),
            applicant_position: ActiveValue::Set(dto.applicant_position),
            applicant_faculty: ActiveValue::Set(dto.applicant_faculty),
            applicant_mobile: ActiveValue::Set(dto.applicant_mobile),
            event_name: ActiveValue::Set(dto.event_name),
            event_date: ActiveValue::Set(dto.event_date),
            time_from: ActiveValue::Set(dto.time_from),
            time_to: ActiveValue::Set(dto.time_to),
            first_year_participation: ActiveValue::Set(dto.first_year_participation),
            place: ActiveValue::Set(dto.place),
            inside_university: ActiveValue::Set(dto.inside_university),
            late_pass_required: ActiveValue::Set(dto.late_pass_required),
            outsiders_invited: ActiveValue::Set(dto.outsiders_invited),
            outsiders_list: ActiveValue::Set(dto.outsiders_list),
            budget_estimate: ActiveValue::Set(dto.budget_estimate),
            fund_collection_methods: ActiveValue::Set(dto.fund_collection_methods),
            student_fee_amount: ActiveValue::Set(dto.student_fee_amount),
            senior_treasurer_name: ActiveValue::Set(dto.senior_treasurer_name),
            senior_treasurer_department: ActiveValue::Set(dto.senior_treasurer_department),
            senior_treasurer_mobile: ActiveValue::Set(dto.senior_treasurer_mobile),
            premises_officer_name: ActiveValue::Set(dto.premises_officer_name),
            premises_officer_designation: ActiveValue::Set(dto.premises_officer_designation),
            premises_officer_division: ActiveValue::Set(dto.premises_officer_division),
            receipt_number: ActiveValue::Set(dto.receipt_number),
            payment_date: ActiveValue::Set(dto.payment_date),
            stage: ActiveValue::Set(EventStage::PendingDean),
            dean_comment: ActiveValue::Set(None),
            premises_comment: ActiveValue::Set(None),
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
    ) -> Result<Option<entity::event_permission::Model>, DbErr> {
        entity::prelude::EventPermission::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets paginated event requests with an optional stage filter, newest
    /// first.
    pub async fn get_paginated(
        &self,
        param: &GetPaginatedEventsParam,
    ) -> Result<(Vec<entity::event_permission::Model>, u64), DbErr> {
        let mut query = entity::prelude::EventPermission::find();

        if let Some(stage) = &param.stage {
            query = query.filter(entity::event_permission::Column::Stage.eq(stage.clone()));
        }

        let paginator = query
            .order_by_desc(entity::event_permission::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(param.page).await?;

        Ok((events, total))
    }

    /// Gets all event requests waiting at the given stage, oldest first,
    /// optionally scoped to a faculty.
    pub async fn find_by_stage(
        &self,
        stage: EventStage,
        faculty: Option<&str>,
    ) -> Result<Vec<entity::event_permission::Model>, DbErr> {
        let mut query = entity::prelude::EventPermission::find()
            .filter(entity::event_permission::Column::Stage.eq(stage));

        if let Some(faculty) = faculty {
            query = query.filter(entity::event_permission::Column::ApplicantFaculty.eq(faculty));
        }

        query
            .order_by_asc(entity::event_permission::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts event requests waiting at the given stage, optionally scoped to
    /// a faculty.
    pub async fn count_by_stage(
        &self,
        stage: EventStage,
        faculty: Option<&str>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::EventPermission::find()
            .filter(entity::event_permission::Column::Stage.eq(stage));

        if let Some(faculty) = faculty {
            query = query.filter(entity::event_permission::Column::ApplicantFaculty.eq(faculty));
        }

        query.count(self.db).await
    }

    /// Gets approved events with a date from today onwards, soonest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of events to return
    pub async fn upcoming_approved(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::event_permission::Model>, DbErr> {
        let today = Utc::now().date_naive();

        entity::prelude::EventPermission::find()
            .filter(entity::event_permission::Column::Stage.eq(EventStage::Approved))
            .filter(entity::event_permission::Column::EventDate.gte(today))
            .order_by_asc(entity::event_permission::Column::EventDate)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Records a review decision.
    ///
    /// Stores the reviewer's comment against the stage that was reviewed, moves
    /// the request to `new_stage`, and stamps `decided_at` when the decision is
    /// terminal.
    pub async fn apply_review(
        &self,
        id: i32,
        reviewed: EventStage,
        new_stage: EventStage,
        comment: Option<String>,
        decided_at: Option<DateTime<Utc>>,
    ) -> Result<entity::event_permission::Model, DbErr> {
        let event = self
            .get_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event_permission::ActiveModel = event.into();

        match reviewed {
            EventStage::PendingDean => active_model.dean_comment = ActiveValue::Set(comment),
            EventStage::PendingPremises => {
                active_model.premises_comment = ActiveValue::Set(comment)
            }
            EventStage::PendingAr => active_model.ar_comment = ActiveValue::Set(comment),
            EventStage::PendingVc => active_model.vc_comment = ActiveValue::Set(comment),
            EventStage::Approved | EventStage::Rejected => {}
        }

        active_model.stage = ActiveValue::Set(new_stage);
        if decided_at.is_some() {
            active_model.decided_at = ActiveValue::Set(decided_at);
        }

        active_model.update(self.db).await
    }
}
