use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for requesting permission to hold an event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventPermissionDto {
    pub society_name: String,
    pub applicant_name: String,
    pub applicant_reg_no: String,
    pub applicant_email: String,
    pub applicant_position: String,
    pub applicant_faculty: String,
    pub applicant_mobile: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    /// "HH:MM"
    pub time_from: String,
    /// "HH:MM"
    pub time_to: String,
    #[serde(default)]
    pub first_year_participation: bool,
    pub place: String,
    pub inside_university: bool,
    #[serde(default)]
    pub late_pass_required: bool,
    #[serde(default)]
    pub outsiders_invited: bool,
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
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPermissionDto {
    pub id: i32,
    pub society_name: String,
    pub applicant_name: String,
    pub applicant_reg_no: String,
    pub applicant_email: String,
    pub applicant_position: String,
    pub applicant_faculty: String,
    pub applicant_mobile: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub time_from: String,
    pub time_to: String,
    pub first_year_participation: bool,
    pub place: String,
    pub inside_university: bool,
    pub late_pass_required: bool,
    pub outsiders_invited: bool,
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
    pub payment_date: Option<NaiveDate>,
    /// Current approval stage, e.g. `PENDING_PREMISES`.
    pub stage: String,
    pub dean_comment: Option<String>,
    pub premises_comment: Option<String>,
    pub ar_comment: Option<String>,
    pub vc_comment: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl EventPermissionDto {
    pub fn from_entity(entity: entity::event_permission::Model) -> Self {
        Self {
            id: entity.id,
            society_name: entity.society_name,
            applicant_name: entity.applicant_name,
            applicant_reg_no: entity.applicant_reg_no,
            applicant_email: entity.applicant_email,
            applicant_position: entity.applicant_position,
            applicant_faculty: entity.applicant_faculty,
            applicant_mobile: entity.applicant_mobile,
            event_name: entity.event_name,
            event_date: entity.event_date,
            time_from: entity.time_from,
            time_to: entity.time_to,
            first_year_participation: entity.first_year_participation,
            place: entity.place,
            inside_university: entity.inside_university,
            late_pass_required: entity.late_pass_required,
            outsiders_invited: entity.outsiders_invited,
            outsiders_list: entity.outsiders_list,
            budget_estimate: entity.budget_estimate,
            fund_collection_methods: entity.fund_collection_methods,
            student_fee_amount: entity.student_fee_amount,
            senior_treasurer_name: entity.senior_treasurer_name,
            senior_treasurer_department: entity.senior_treasurer_department,
            senior_treasurer_mobile: entity.senior_treasurer_mobile,
            premises_officer_name: entity.premises_officer_name,
            premises_officer_designation: entity.premises_officer_designation,
            premises_officer_division: entity.premises_officer_division,
            receipt_number: entity.receipt_number,
            payment_date: entity.payment_date,
            stage: entity.stage.to_value(),
            dean_comment: entity.dean_comment,
            premises_comment: entity.premises_comment,
            ar_comment: entity.ar_comment,
            vc_comment: entity.vc_comment,
            decided_at: entity.decided_at,
            created_at: entity.created_at,
        }
    }
}

/// Public view of an upcoming approved event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpcomingEventDto {
    pub id: i32,
    pub society_name: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub time_from: String,
    pub time_to: String,
    pub place: String,
}

impl UpcomingEventDto {
    pub fn from_entity(entity: entity::event_permission::Model) -> Self {
        Self {
            id: entity.id,
            society_name: entity.society_name,
            event_name: entity.event_name,
            event_date: entity.event_date,
            time_from: entity.time_from,
            time_to: entity.time_to,
            place: entity.place,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventListItemDto {
    pub id: i32,
    pub society_name: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub applicant_faculty: String,
    pub inside_university: bool,
    pub stage: String,
    pub created_at: DateTime<Utc>,
}

impl EventListItemDto {
    pub fn from_entity(entity: entity::event_permission::Model) -> Self {
        Self {
            id: entity.id,
            society_name: entity.society_name,
            event_name: entity.event_name,
            event_date: entity.event_date,
            applicant_faculty: entity.applicant_faculty,
            inside_university: entity.inside_university,
            stage: entity.stage.to_value(),
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for checking that an applicant holds the position they claim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateApplicantDto {
    pub society_name: String,
    pub position: String,
    pub reg_no: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateApplicantResultDto {
    pub valid: bool,
}
