//! Nested form blocks shared by registration and renewal applications.
//!
//! These mirror the paper registration form: a staff-level senior treasurer
//! contact, six student office bearers, an advisory board, and free-form
//! member and planning lists. They are stored verbatim as JSON columns on the
//! request tables.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact block for a staff member (senior treasurer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StaffContactDto {
    #[serde(default)]
    pub title: String,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub mobile: String,
}

/// Contact block for a student office bearer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfficeBearerDto {
    pub reg_no: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub email: String,
    pub mobile: String,
}

/// The six elected positions every society must fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OfficeBearersDto {
    pub president: OfficeBearerDto,
    pub vice_president: OfficeBearerDto,
    pub secretary: OfficeBearerDto,
    pub joint_secretary: OfficeBearerDto,
    pub junior_treasurer: OfficeBearerDto,
    pub editor: OfficeBearerDto,
}

impl OfficeBearersDto {
    /// Iterates positions as (position name, bearer) pairs.
    pub fn positions(&self) -> [(&'static str, &OfficeBearerDto); 6] {
        [
            ("president", &self.president),
            ("vice_president", &self.vice_president),
            ("secretary", &self.secretary),
            ("joint_secretary", &self.joint_secretary),
            ("junior_treasurer", &self.junior_treasurer),
            ("editor", &self.editor),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvisoryBoardMemberDto {
    pub name: String,
    pub designation: String,
    pub department: String,
}

/// A member named only by registration number and name (committee/member lists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedMemberDto {
    pub reg_no: String,
    pub name: String,
}

/// One row of the annual activity plan (or the previous year's activity list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedEventDto {
    pub month: String,
    pub activity: String,
}
