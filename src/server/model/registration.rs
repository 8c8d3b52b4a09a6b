//! Society registration parameter types.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ApprovalStage;
use sea_orm::ActiveEnum;
use serde_json::Value;

use crate::{model::registration::CreateRegistrationDto, server::error::AppError};

/// Parameters for persisting a new registration request.
///
/// Nested form blocks are serialized to JSON here so the repository can store
/// them without knowing the form shape.
#[derive(Debug, Clone)]
pub struct CreateRegistrationParam {
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
    pub senior_treasurer: Value,
    pub office_bearers: Value,
    pub advisory_board: Value,
    pub committee_members: Value,
    pub members: Value,
    pub planned_events: Value,
    pub year: i32,
}

impl CreateRegistrationParam {
    /// Converts the submission DTO, defaulting the year when omitted.
    pub fn from_dto(dto: CreateRegistrationDto, current_year: i32) -> Result<Self, AppError> {
        let year = dto.year.unwrap_or(current_year);

        Ok(Self {
            society_name: dto.society_name,
            aims: dto.aims,
            applicant_full_name: dto.applicant_full_name,
            applicant_reg_no: dto.applicant_reg_no,
            applicant_email: dto.applicant_email,
            applicant_faculty: dto.applicant_faculty,
            applicant_mobile: dto.applicant_mobile,
            agm_date: dto.agm_date,
            bank_name: dto.bank_name,
            bank_account: dto.bank_account,
            senior_treasurer: to_json(&dto.senior_treasurer)?,
            office_bearers: to_json(&dto.office_bearers)?,
            advisory_board: to_json(&dto.advisory_board)?,
            committee_members: to_json(&dto.committee_members)?,
            members: to_json(&dto.members)?,
            planned_events: to_json(&dto.planned_events)?,
            year,
        })
    }
}

/// Parameters for paginated registration queries with optional filters.
#[derive(Debug, Clone)]
pub struct GetPaginatedRegistrationsParam {
    pub page: u64,
    pub per_page: u64,
    pub year: Option<i32>,
    pub stage: Option<ApprovalStage>,
}

impl GetPaginatedRegistrationsParam {
    /// Builds the query params, parsing an optional stage filter string.
    pub fn new(
        page: u64,
        per_page: u64,
        year: Option<i32>,
        stage: Option<String>,
    ) -> Result<Self, AppError> {
        let stage = stage
            .map(|s| {
                ApprovalStage::try_from_value(&s)
                    .map_err(|_| AppError::BadRequest(format!("Unknown stage '{}'", s)))
            })
            .transpose()?;

        Ok(Self {
            page,
            per_page,
            year,
            stage,
        })
    }
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize form block: {}", e)))
}
