use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::forms::{
    AdvisoryBoardMemberDto, NamedMemberDto, OfficeBearersDto, PlannedEventDto, StaffContactDto,
};

/// Payload for submitting a society registration application.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRegistrationDto {
    pub society_name: String,
    pub aims: String,
    pub applicant_full_name: String,
    pub applicant_reg_no: String,
    pub applicant_email: String,
    pub applicant_faculty: String,
    pub applicant_mobile: String,
    pub agm_date: Option<NaiveDate>,
    pub bank_name: String,
    pub bank_account: String,
    pub senior_treasurer: StaffContactDto,
    pub office_bearers: OfficeBearersDto,
    #[serde(default)]
    pub advisory_board: Vec<AdvisoryBoardMemberDto>,
    #[serde(default)]
    pub committee_members: Vec<NamedMemberDto>,
    #[serde(default)]
    pub members: Vec<NamedMemberDto>,
    #[serde(default)]
    pub planned_events: Vec<PlannedEventDto>,
    /// Registration year; defaults to the current year when omitted.
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub society_name: String,
    pub aims: String,
    pub applicant_full_name: String,
    pub applicant_reg_no: String,
    pub applicant_email: String,
    pub applicant_faculty: String,
    pub applicant_mobile: String,
    pub agm_date: Option<NaiveDate>,
    pub bank_name: String,
    pub bank_account: String,
    pub senior_treasurer: StaffContactDto,
    pub office_bearers: OfficeBearersDto,
    pub advisory_board: Vec<AdvisoryBoardMemberDto>,
    pub committee_members: Vec<NamedMemberDto>,
    pub members: Vec<NamedMemberDto>,
    pub planned_events: Vec<PlannedEventDto>,
    pub year: i32,
    /// Current approval stage, e.g. `PENDING_DEAN`.
    pub stage: String,
    pub dean_comment: Option<String>,
    pub ar_comment: Option<String>,
    pub vc_comment: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RegistrationDto {
    /// Converts an entity model, deserializing the JSON form blocks.
    ///
    /// Fails only if stored JSON does not match the form schema, which would
    /// indicate corrupted data rather than a caller error.
    pub fn from_entity(
        entity: entity::society_registration::Model,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: entity.id,
            society_name: entity.society_name,
            aims: entity.aims,
            applicant_full_name: entity.applicant_full_name,
            applicant_reg_no: entity.applicant_reg_no,
            applicant_email: entity.applicant_email,
            applicant_faculty: entity.applicant_faculty,
            applicant_mobile: entity.applicant_mobile,
            agm_date: entity.agm_date,
            bank_name: entity.bank_name,
            bank_account: entity.bank_account,
            senior_treasurer: serde_json::from_value(entity.senior_treasurer)?,
            office_bearers: serde_json::from_value(entity.office_bearers)?,
            advisory_board: serde_json::from_value(entity.advisory_board)?,
            committee_members: serde_json::from_value(entity.committee_members)?,
            members: serde_json::from_value(entity.members)?,
            planned_events: serde_json::from_value(entity.planned_events)?,
            year: entity.year,
            stage: entity.stage.to_value(),
            dean_comment: entity.dean_comment,
            ar_comment: entity.ar_comment,
            vc_comment: entity.vc_comment,
            decided_at: entity.decided_at,
            created_at: entity.created_at,
        })
    }
}

/// Compact row for admin listings; the full form is fetched per id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListItemDto {
    pub id: i32,
    pub society_name: String,
    pub applicant_full_name: String,
    pub applicant_faculty: String,
    pub year: i32,
    pub stage: String,
    pub created_at: DateTime<Utc>,
}

impl RegistrationListItemDto {
    pub fn from_entity(entity: entity::society_registration::Model) -> Self {
        Self {
            id: entity.id,
            society_name: entity.society_name,
            applicant_full_name: entity.applicant_full_name,
            applicant_faculty: entity.applicant_faculty,
            year: entity.year,
            stage: entity.stage.to_value(),
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRegistrationsDto {
    pub registrations: Vec<RegistrationListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Comment accompanying an approval or rejection.
///
/// A comment is optional when approving and required when rejecting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub comment: Option<String>,
}
