use super::*;
use crate::{
    model::event::ValidateApplicantDto,
    server::{
        error::{workflow::WorkflowError, AppError},
        service::event::EventPermissionService,
    },
};
use chrono::{Days, Utc};
use entity::sea_orm_active_enums::{AdminRole, ApprovalStage, EventStage, SocietyStatus};

/// Inside-university events pass through all four reviewers.
///
/// Expected: PENDING_PREMISES -> PENDING_AR -> PENDING_VC -> APPROVED
#[tokio::test]
async fn inside_event_routes_through_premises() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Science")
        .build()
        .await
        .unwrap();
    let premises = factory::create_admin_with_role(db, AdminRole::PremisesOfficer)
        .await
        .unwrap();
    let ar = factory::create_admin_with_role(db, AdminRole::AssistantRegistrar)
        .await
        .unwrap();
    let vc = factory::create_admin_with_role(db, AdminRole::ViceChancellor)
        .await
        .unwrap();

    let event = factory::EventPermissionFactory::new(db)
        .inside_university(true)
        .build()
        .await
        .unwrap();

    let service = EventPermissionService::new(db);

    let after_dean = service.approve(event.id, &dean, None).await.unwrap();
    assert_eq!(after_dean.stage, "PENDING_PREMISES");

    let after_premises = service
        .approve(event.id, &premises, Some("Hall booked".to_string()))
        .await
        .unwrap();
    assert_eq!(after_premises.stage, "PENDING_AR");
    assert_eq!(after_premises.premises_comment.as_deref(), Some("Hall booked"));

    let after_ar = service.approve(event.id, &ar, None).await.unwrap();
    assert_eq!(after_ar.stage, "PENDING_VC");

    let after_vc = service.approve(event.id, &vc, None).await.unwrap();
    assert_eq!(after_vc.stage, "APPROVED");
    assert!(after_vc.decided_at.is_some());
}

/// Outside events skip the premises officer entirely.
///
/// Expected: dean approval moves straight to PENDING_AR
#[tokio::test]
async fn outside_event_skips_premises() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Science")
        .build()
        .await
        .unwrap();
    let event = factory::EventPermissionFactory::new(db)
        .inside_university(false)
        .build()
        .await
        .unwrap();

    let after_dean = EventPermissionService::new(db)
        .approve(event.id, &dean, None)
        .await
        .unwrap();

    assert_eq!(after_dean.stage, "PENDING_AR");
}

/// The premises officer never sees an outside event.
///
/// Expected: Err(StageMismatch) when acting on one at the AR stage
#[tokio::test]
async fn premises_officer_cannot_act_on_outside_event() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let premises = factory::create_admin_with_role(db, AdminRole::PremisesOfficer)
        .await
        .unwrap();
    let event = factory::EventPermissionFactory::new(db)
        .inside_university(false)
        .stage(EventStage::PendingAr)
        .build()
        .await
        .unwrap();

    let result = EventPermissionService::new(db)
        .approve(event.id, &premises, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::StageMismatch))
    ));
}

/// Submission is gated on the society being registered and active, and the
/// date being in the future.
#[tokio::test]
async fn submit_validates_society_and_date() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    factory::SocietyFactory::new(db)
        .name("Inactive Society")
        .status(SocietyStatus::Inactive)
        .build()
        .await
        .unwrap();
    factory::SocietyFactory::new(db)
        .name("Active Society")
        .build()
        .await
        .unwrap();

    let service = EventPermissionService::new(db);
    let future = Utc::now().date_naive().checked_add_days(Days::new(14)).unwrap();
    let past = Utc::now().date_naive().checked_sub_days(Days::new(1)).unwrap();

    let unknown = service
        .submit(sample_event_dto("Ghost Society", future))
        .await;
    assert!(matches!(
        unknown,
        Err(AppError::WorkflowErr(WorkflowError::UnknownSociety(_)))
    ));

    let inactive = service
        .submit(sample_event_dto("Inactive Society", future))
        .await;
    assert!(matches!(
        inactive,
        Err(AppError::WorkflowErr(WorkflowError::SocietyInactive(_)))
    ));

    let past_date = service.submit(sample_event_dto("Active Society", past)).await;
    assert!(matches!(
        past_date,
        Err(AppError::WorkflowErr(WorkflowError::EventDateInPast))
    ));

    let accepted = service
        .submit(sample_event_dto("Active Society", future))
        .await
        .unwrap();
    assert_eq!(accepted.stage, "PENDING_DEAN");
}

/// Applicant validation matches against the office bearers of the latest
/// approved application.
///
/// Expected: true for the secretary on record, false for mismatches
#[tokio::test]
async fn validate_applicant_checks_office_bearers() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    // Approved registration carries the current office bearers (never renewed)
    factory::RegistrationFactory::new(db)
        .society_name("Validated Society")
        .stage(ApprovalStage::Approved)
        .build()
        .await
        .unwrap();

    let service = EventPermissionService::new(db);

    // The factory's secretary is S/18/003 / s18003@students.pdn.ac.lk
    let valid = service
        .validate_applicant(&ValidateApplicantDto {
            society_name: "Validated Society".to_string(),
            position: "Secretary".to_string(),
            reg_no: "S/18/003".to_string(),
            email: "S18003@students.pdn.ac.lk".to_string(),
        })
        .await
        .unwrap();
    assert!(valid);

    let wrong_email = service
        .validate_applicant(&ValidateApplicantDto {
            society_name: "Validated Society".to_string(),
            position: "Secretary".to_string(),
            reg_no: "S/18/003".to_string(),
            email: "someone.else@students.pdn.ac.lk".to_string(),
        })
        .await
        .unwrap();
    assert!(!wrong_email);

    let no_society = service
        .validate_applicant(&ValidateApplicantDto {
            society_name: "Ghost Society".to_string(),
            position: "Secretary".to_string(),
            reg_no: "S/18/003".to_string(),
            email: "s18003@students.pdn.ac.lk".to_string(),
        })
        .await
        .unwrap();
    assert!(!no_society);
}

fn sample_event_dto(
    society_name: &str,
    event_date: chrono::NaiveDate,
) -> crate::model::event::CreateEventPermissionDto {
    serde_json::from_value(serde_json::json!({
        "society_name": society_name,
        "applicant_name": "C. Fernando",
        "applicant_reg_no": "S/18/003",
        "applicant_email": "s18003@students.pdn.ac.lk",
        "applicant_position": "Secretary",
        "applicant_faculty": "Science",
        "applicant_mobile": "0770000000",
        "event_name": "Annual Hackathon",
        "event_date": event_date,
        "time_from": "09:00",
        "time_to": "17:00",
        "place": "Main Hall",
        "inside_university": true,
        "senior_treasurer_name": "W. Bandara",
        "senior_treasurer_department": "Computer Science",
        "senior_treasurer_mobile": "0712345678"
    }))
    .expect("valid dto json")
}
