use super::*;
use crate::{
    model::registration::CreateRegistrationDto, server::model::registration::CreateRegistrationParam,
};

fn sample_dto(society_name: &str) -> CreateRegistrationDto {
    serde_json::from_value(serde_json::json!({
        "society_name": society_name,
        "aims": "Promote student research",
        "applicant_full_name": "A. Perera",
        "applicant_reg_no": "S/18/001",
        "applicant_email": "s18001@students.pdn.ac.lk",
        "applicant_faculty": "Science",
        "applicant_mobile": "0771234567",
        "bank_name": "Peoples Bank",
        "bank_account": "123456789",
        "senior_treasurer": {
            "name": "W. Bandara",
            "designation": "Senior Lecturer",
            "department": "Computer Science",
            "email": "bandara@pdn.ac.lk",
            "mobile": "0712345678"
        },
        "office_bearers": {
            "president": { "reg_no": "S/18/001", "name": "A. Perera", "email": "s18001@students.pdn.ac.lk", "mobile": "0770000001" },
            "vice_president": { "reg_no": "S/18/002", "name": "B. Silva", "email": "s18002@students.pdn.ac.lk", "mobile": "0770000002" },
            "secretary": { "reg_no": "S/18/003", "name": "C. Fernando", "email": "s18003@students.pdn.ac.lk", "mobile": "0770000003" },
            "joint_secretary": { "reg_no": "S/18/004", "name": "D. Jayasinghe", "email": "s18004@students.pdn.ac.lk", "mobile": "0770000004" },
            "junior_treasurer": { "reg_no": "S/18/005", "name": "E. Wickramasinghe", "email": "s18005@students.pdn.ac.lk", "mobile": "0770000005" },
            "editor": { "reg_no": "S/18/006", "name": "F. Gunawardena", "email": "s18006@students.pdn.ac.lk", "mobile": "0770000006" }
        },
        "members": [ { "reg_no": "S/19/101", "name": "G. Herath" } ]
    }))
    .expect("valid dto json")
}

/// Tests creating a registration from a submission DTO.
///
/// Verifies that the request lands at the dean stage with the form blocks
/// stored and the default year applied.
///
/// Expected: Ok with stage PENDING_DEAN and year 2026
#[tokio::test]
async fn creates_registration_at_dean_stage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SocietyRegistration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = CreateRegistrationParam::from_dto(sample_dto("Research Circle"), 2026)
        .expect("param conversion");
    let registration = RegistrationRepository::new(db).create(param).await?;

    assert_eq!(registration.society_name, "Research Circle");
    assert_eq!(registration.stage, ApprovalStage::PendingDean);
    assert_eq!(registration.year, 2026);
    assert!(registration.dean_comment.is_none());
    assert!(registration.decided_at.is_none());
    assert!(registration.office_bearers.get("president").is_some());

    Ok(())
}
