use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EventStage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub society_name: String,
    pub applicant_name: String,
    pub applicant_reg_no: String,
    pub applicant_email: String,
    /// Position the applicant holds in the society (e.g. Secretary).
    pub applicant_position: String,
    pub applicant_faculty: String,
    pub applicant_mobile: String,
    pub event_name: String,
    pub event_date: Date,
    /// Start and end times in "HH:MM" form, as submitted.
    pub time_from: String,
    pub time_to: String,
    pub first_year_participation: bool,
    pub place: String,
    pub inside_university: bool,
    pub late_pass_required: bool,
    pub outsiders_invited: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub outsiders_list: Option<String>,
    pub budget_estimate: Option<String>,
    pub fund_collection_methods: Option<String>,
    pub student_fee_amount: Option<String>,
    pub senior_treasurer_name: String,
    pub senior_treasurer_department: String,
    pub senior_treasurer_mobile: String,
    pub premises_officer_name: Option<String>,
    pub premises_officer_designation: Option<String>,
    pub premises_officer_division: Option<String>,
    pub receipt_number: Option<String>,
    pub payment_date: Option<Date>,
    pub stage: EventStage,
    pub dean_comment: Option<String>,
    pub premises_comment: Option<String>,
    pub ar_comment: Option<String>,
    pub vc_comment: Option<String>,
    pub decided_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
