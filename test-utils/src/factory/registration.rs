use crate::factory::helpers::{
    next_id, sample_advisory_board, sample_named_members, sample_office_bearers,
    sample_planned_events, sample_senior_treasurer,
};
use chrono::{Datelike, Utc};
use entity::sea_orm_active_enums::ApprovalStage;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test society registration requests.
///
/// Defaults describe a fresh submission sitting at the dean stage for the
/// Science faculty; override what the scenario under test needs.
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    society_name: String,
    applicant_faculty: String,
    year: i32,
    stage: ApprovalStage,
}

impl<'a> RegistrationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            society_name: format!("Society {}", id),
            applicant_faculty: "Science".to_string(),
            year: Utc::now().year(),
            stage: ApprovalStage::PendingDean,
        }
    }

    pub fn society_name(mut self, name: impl Into<String>) -> Self {
        self.society_name = name.into();
        self
    }

    pub fn applicant_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.applicant_faculty = faculty.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn stage(mut self, stage: ApprovalStage) -> Self {
        self.stage = stage;
        self
    }

    pub async fn build(self) -> Result<entity::society_registration::Model, DbErr> {
        entity::society_registration::ActiveModel {
            society_name: ActiveValue::Set(self.society_name),
            aims: ActiveValue::Set("Promote student activities".to_string()),
            applicant_full_name: ActiveValue::Set("A. Perera".to_string()),
            applicant_reg_no: ActiveValue::Set("S/18/001".to_string()),
            applicant_email: ActiveValue::Set("s18001@students.pdn.ac.lk".to_string()),
            applicant_faculty: ActiveValue::Set(self.applicant_faculty),
            applicant_mobile: ActiveValue::Set("0771234567".to_string()),
            agm_date: ActiveValue::Set(None),
            bank_name: ActiveValue::Set("Peoples Bank".to_string()),
            bank_account: ActiveValue::Set("123456789".to_string()),
            senior_treasurer: ActiveValue::Set(sample_senior_treasurer()),
            office_bearers: ActiveValue::Set(sample_office_bearers()),
            advisory_board: ActiveValue::Set(sample_advisory_board()),
            committee_members: ActiveValue::Set(sample_named_members()),
            members: ActiveValue::Set(sample_named_members()),
            planned_events: ActiveValue::Set(sample_planned_events()),
            year: ActiveValue::Set(self.year),
            stage: ActiveValue::Set(self.stage),
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
}

/// Creates a registration request with default values.
pub async fn create_registration(
    db: &DatabaseConnection,
) -> Result<entity::society_registration::Model, DbErr> {
    RegistrationFactory::new(db).build().await
}
