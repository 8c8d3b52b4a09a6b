use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ApprovalStage;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "society_registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub society_name: String,
    #[sea_orm(column_type = "Text")]
    pub aims: String,
    pub applicant_full_name: String,
    pub applicant_reg_no: String,
    pub applicant_email: String,
    pub applicant_faculty: String,
    pub applicant_mobile: String,
    pub agm_date: Option<Date>,
    pub bank_name: String,
    pub bank_account: String,
    /// Senior treasurer contact block.
    pub senior_treasurer: Json,
    /// Office bearers keyed by position (president, secretary, ...).
    pub office_bearers: Json,
    pub advisory_board: Json,
    pub committee_members: Json,
    pub members: Json,
    pub planned_events: Json,
    /// Registration year the application covers.
    pub year: i32,
    pub stage: ApprovalStage,
    pub dean_comment: Option<String>,
    pub ar_comment: Option<String>,
    pub vc_comment: Option<String>,
    /// Set when the request reaches a terminal stage.
    pub decided_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
