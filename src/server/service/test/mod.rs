use test_utils::{builder::TestBuilder, factory};

use crate::model::registration::CreateRegistrationDto;

mod event_workflow;
mod registration_workflow;
mod renewal_workflow;

/// A complete registration submission for the given society name.
fn sample_registration_dto(society_name: &str) -> CreateRegistrationDto {
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
