//! Society renewal parameter types.

use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    model::renewal::CreateRenewalDto,
    server::{error::AppError, model::registration::to_json},
};

/// Parameters for persisting a new renewal request.
#[derive(Debug, Clone)]
pub struct CreateRenewalParam {
    pub society_name: String,
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
    pub previous_activities: Value,
    pub difficulties: Option<String>,
    pub website: Option<String>,
    pub year: i32,
}

impl CreateRenewalParam {
    /// Converts the submission DTO, defaulting the year when omitted.
    pub fn from_dto(dto: CreateRenewalDto, current_year: i32) -> Result<Self, AppError> {
        let year = dto.year.unwrap_or(current_year);

        Ok(Self {
            society_name: dto.society_name,
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
            previous_activities: to_json(&dto.previous_activities)?,
            difficulties: dto.difficulties,
            website: dto.website,
            year,
        })
    }
}
