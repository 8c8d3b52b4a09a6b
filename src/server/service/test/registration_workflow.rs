use super::*;
use crate::server::{
    data::society::SocietyRepository,
    error::{workflow::WorkflowError, AppError},
    service::registration::RegistrationService,
};
use entity::sea_orm_active_enums::{AdminRole, SocietyStatus};

/// Walks a registration through the full dean -> AR -> VC approval chain.
///
/// Verifies the stage after each approval and that the final approval creates
/// an active society carrying the registration year.
///
/// Expected: stages PENDING_AR, PENDING_VC, APPROVED; society row created
#[tokio::test]
async fn full_approval_chain_creates_society() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Science")
        .build()
        .await
        .unwrap();
    let ar = factory::create_admin_with_role(db, AdminRole::AssistantRegistrar)
        .await
        .unwrap();
    let vc = factory::create_admin_with_role(db, AdminRole::ViceChancellor)
        .await
        .unwrap();

    let registration = factory::RegistrationFactory::new(db)
        .society_name("Quantum Circle")
        .applicant_faculty("Science")
        .year(2026)
        .build()
        .await
        .unwrap();

    let service = RegistrationService::new(db);

    let after_dean = service
        .approve(registration.id, &dean, Some("Endorsed".to_string()))
        .await
        .unwrap();
    assert_eq!(after_dean.stage, "PENDING_AR");
    assert_eq!(after_dean.dean_comment.as_deref(), Some("Endorsed"));

    let after_ar = service.approve(registration.id, &ar, None).await.unwrap();
    assert_eq!(after_ar.stage, "PENDING_VC");

    let after_vc = service.approve(registration.id, &vc, None).await.unwrap();
    assert_eq!(after_vc.stage, "APPROVED");
    assert!(after_vc.decided_at.is_some());

    let society = SocietyRepository::new(db)
        .find_by_name("Quantum Circle")
        .await
        .unwrap()
        .expect("society created on final approval");
    assert_eq!(society.status, SocietyStatus::Active);
    assert_eq!(society.registered_year, 2026);
}

/// A dean may not act on another faculty's applications.
///
/// Expected: Err(FacultyMismatch)
#[tokio::test]
async fn dean_cannot_approve_other_faculty() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Arts")
        .build()
        .await
        .unwrap();
    let registration = factory::RegistrationFactory::new(db)
        .applicant_faculty("Science")
        .build()
        .await
        .unwrap();

    let result = RegistrationService::new(db)
        .approve(registration.id, &dean, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::FacultyMismatch))
    ));
}

/// A reviewer may only act when the request sits at their stage.
///
/// Expected: Err(StageMismatch) for the AR acting at the dean stage
#[tokio::test]
async fn ar_cannot_approve_dean_stage() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let ar = factory::create_admin_with_role(db, AdminRole::AssistantRegistrar)
        .await
        .unwrap();
    let registration = factory::create_registration(db).await.unwrap();

    let result = RegistrationService::new(db)
        .approve(registration.id, &ar, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::StageMismatch))
    ));
}

/// Student services never reviews registrations.
///
/// Expected: Err(RoleNotReviewer)
#[tokio::test]
async fn student_service_cannot_review() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let ss = factory::create_admin_with_role(db, AdminRole::StudentService)
        .await
        .unwrap();
    let registration = factory::create_registration(db).await.unwrap();

    let result = RegistrationService::new(db)
        .approve(registration.id, &ss, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::RoleNotReviewer))
    ));
}

/// Rejections without an explanatory comment are refused.
///
/// Expected: Err(CommentRequired) for None and for whitespace
#[tokio::test]
async fn reject_requires_comment() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Science")
        .build()
        .await
        .unwrap();
    let registration = factory::create_registration(db).await.unwrap();

    let service = RegistrationService::new(db);

    let no_comment = service.reject(registration.id, &dean, None).await;
    assert!(matches!(
        no_comment,
        Err(AppError::WorkflowErr(WorkflowError::CommentRequired))
    ));

    let blank = service
        .reject(registration.id, &dean, Some("   ".to_string()))
        .await;
    assert!(matches!(
        blank,
        Err(AppError::WorkflowErr(WorkflowError::CommentRequired))
    ));
}

/// A rejected request is terminal.
///
/// Expected: rejection sticks; later approval attempts get AlreadyDecided
#[tokio::test]
async fn rejection_is_terminal() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Science")
        .build()
        .await
        .unwrap();
    let registration = factory::create_registration(db).await.unwrap();

    let service = RegistrationService::new(db);

    let rejected = service
        .reject(registration.id, &dean, Some("Missing constitution".to_string()))
        .await
        .unwrap();
    assert_eq!(rejected.stage, "REJECTED");
    assert_eq!(rejected.dean_comment.as_deref(), Some("Missing constitution"));

    let retry = service.approve(registration.id, &dean, None).await;
    assert!(matches!(
        retry,
        Err(AppError::WorkflowErr(WorkflowError::AlreadyDecided))
    ));
}

/// Submitting a registration under an active society's name is refused;
/// an inactive society may re-register.
#[tokio::test]
async fn duplicate_names_checked_against_active_societies() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    factory::SocietyFactory::new(db)
        .name("Chess Club")
        .build()
        .await
        .unwrap();
    factory::SocietyFactory::new(db)
        .name("Lapsed Club")
        .status(SocietyStatus::Inactive)
        .build()
        .await
        .unwrap();

    let service = RegistrationService::new(db);

    let duplicate = service.submit(super::sample_registration_dto("Chess Club")).await;
    assert!(matches!(
        duplicate,
        Err(AppError::WorkflowErr(WorkflowError::DuplicateSociety(_)))
    ));

    let reregistered = service
        .submit(super::sample_registration_dto("Lapsed Club"))
        .await
        .unwrap();
    assert_eq!(reregistered.stage, "PENDING_DEAN");
}
