use super::*;
use crate::server::{
    data::society::SocietyRepository,
    error::{workflow::WorkflowError, AppError},
    service::renewal::RenewalService,
};
use entity::sea_orm_active_enums::{AdminRole, ApprovalStage, SocietyStatus};

/// Renewals for unknown societies are refused at submission.
///
/// Expected: Err(UnknownSociety)
#[tokio::test]
async fn submit_rejects_unknown_society() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let registration = super::sample_registration_dto("Ghost Society");
    let dto = serde_json::from_value(serde_json::to_value(&registration).unwrap())
        .expect("registration fields are a subset of renewal fields");

    let result = RenewalService::new(db).submit(dto).await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::UnknownSociety(_)))
    ));
}

/// Final approval stamps the renewal year and reactivates a lapsed society.
///
/// Expected: stage APPROVED; society active with last_renewed_year updated
#[tokio::test]
async fn vc_approval_marks_society_renewed() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let society = factory::SocietyFactory::new(db)
        .name("Dormant Society")
        .status(SocietyStatus::Inactive)
        .last_renewed_year(Some(2024))
        .build()
        .await
        .unwrap();

    let vc = factory::create_admin_with_role(db, AdminRole::ViceChancellor)
        .await
        .unwrap();
    let renewal = factory::RenewalFactory::new(db)
        .society_name("Dormant Society")
        .year(2026)
        .stage(ApprovalStage::PendingVc)
        .build()
        .await
        .unwrap();

    let approved = RenewalService::new(db)
        .approve(renewal.id, &vc, None)
        .await
        .unwrap();
    assert_eq!(approved.stage, "APPROVED");

    let refreshed = SocietyRepository::new(db)
        .get_by_id(society.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refreshed.status, SocietyStatus::Active);
    assert_eq!(refreshed.last_renewed_year, Some(2026));
}

/// Renewals follow the same faculty gating as registrations.
///
/// Expected: Err(FacultyMismatch) for the wrong dean
#[tokio::test]
async fn dean_faculty_gating_applies() {
    let mut test = TestBuilder::new().with_workflow_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let dean = factory::AdminUserFactory::new(db)
        .role(AdminRole::Dean)
        .faculty("Medicine")
        .build()
        .await
        .unwrap();
    let renewal = factory::RenewalFactory::new(db)
        .applicant_faculty("Science")
        .build()
        .await
        .unwrap();

    let result = RenewalService::new(db).approve(renewal.id, &dean, None).await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::FacultyMismatch))
    ));
}
