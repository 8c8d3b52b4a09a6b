use crate::factory::helpers::next_id;
use chrono::{Days, NaiveDate, Utc};
use entity::sea_orm_active_enums::EventStage;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event-permission requests.
///
/// Defaults describe an inside-university event a month out, sitting at the
/// dean stage.
pub struct EventPermissionFactory<'a> {
    db: &'a DatabaseConnection,
    society_name: String,
    applicant_faculty: String,
    event_name: String,
    event_date: NaiveDate,
    inside_university: bool,
    stage: EventStage,
}

impl<'a> EventPermissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            society_name: format!("Society {}", id),
            applicant_faculty: "Science".to_string(),
            event_name: format!("Event {}", id),
            event_date: Utc::now()
                .date_naive()
                .checked_add_days(Days::new(30))
                .expect("in range"),
            inside_university: true,
            stage: EventStage::PendingDean,
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

    pub fn event_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = name.into();
        self
    }

    pub fn event_date(mut self, date: NaiveDate) -> Self {
        self.event_date = date;
        self
    }

    pub fn inside_university(mut self, inside: bool) -> Self {
        self.inside_university = inside;
        self
    }

    pub fn stage(mut self, stage: EventStage) -> Self {
        self.stage = stage;
        self
    }

    pub async fn build(self) -> Result<entity::event_permission::Model, DbErr> {
        entity::event_permission::ActiveModel {
            society_name: ActiveValue::Set(self.society_name),
            applicant_name: ActiveValue::Set("C. Fernando".to_string()),
            applicant_reg_no: ActiveValue::Set("S/18/003".to_string()),
            applicant_email: ActiveValue::Set("s18003@students.pdn.ac.lk".to_string()),
            applicant_position: ActiveValue::Set("Secretary".to_string()),
            applicant_faculty: ActiveValue::Set(self.applicant_faculty),
            applicant_mobile: ActiveValue::Set("0770000000".to_string()),
            event_name: ActiveValue::Set(self.event_name),
            event_date: ActiveValue::Set(self.event_date),
            time_from: ActiveValue::Set("09:00".to_string()),
            time_to: ActiveValue::Set("17:00".to_string()),
            first_year_participation: ActiveValue::Set(false),
            place: ActiveValue::Set("Main Hall".to_string()),
            inside_university: ActiveValue::Set(self.inside_university),
            late_pass_required: ActiveValue::Set(false),
            outsiders_invited: ActiveValue::Set(false),
            outsiders_list: ActiveValue::Set(None),
            budget_estimate: ActiveValue::Set(Some("25000".to_string())),
            fund_collection_methods: ActiveValue::Set(Some("Membership fees".to_string())),
            student_fee_amount: ActiveValue::Set(None),
            senior_treasurer_name: ActiveValue::Set("W. Bandara".to_string()),
            senior_treasurer_department: ActiveValue::Set("Computer Science".to_string()),
            senior_treasurer_mobile: ActiveValue::Set("0712345678".to_string()),
            premises_officer_name: ActiveValue::Set(None),
            premises_officer_designation: ActiveValue::Set(None),
            premises_officer_division: ActiveValue::Set(None),
            receipt_number: ActiveValue::Set(None),
            payment_date: ActiveValue::Set(None),
            stage: ActiveValue::Set(self.stage),
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
}

/// Creates an event-permission request with default values.
pub async fn create_event_permission(
    db: &DatabaseConnection,
) -> Result<entity::event_permission::Model, DbErr> {
    EventPermissionFactory::new(db).build().await
}
