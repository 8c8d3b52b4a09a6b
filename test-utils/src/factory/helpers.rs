use serde_json::{json, Value};
use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-wide unique id for factory defaults.
///
/// Guarantees that two factories in the same test never collide on unique
/// columns such as society name or admin email.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::SeqCst)
}

/// Default senior treasurer contact block.
pub fn sample_senior_treasurer() -> Value {
    json!({
        "title": "Dr.",
        "name": "W. Bandara",
        "designation": "Senior Lecturer",
        "department": "Computer Science",
        "email": "bandara@pdn.ac.lk",
        "address": "Faculty of Science, Peradeniya",
        "mobile": "0712345678",
    })
}

/// Default office bearer block keyed by position.
pub fn sample_office_bearers() -> Value {
    let bearer = |reg_no: &str, name: &str| {
        json!({
            "reg_no": reg_no,
            "name": name,
            "address": "University of Peradeniya",
            "email": format!("{}@students.pdn.ac.lk", reg_no.to_lowercase().replace('/', "")),
            "mobile": "0770000000",
        })
    };

    json!({
        "president": bearer("S/18/001", "A. Perera"),
        "vice_president": bearer("S/18/002", "B. Silva"),
        "secretary": bearer("S/18/003", "C. Fernando"),
        "joint_secretary": bearer("S/18/004", "D. Jayasinghe"),
        "junior_treasurer": bearer("S/18/005", "E. Wickramasinghe"),
        "editor": bearer("S/18/006", "F. Gunawardena"),
    })
}

pub fn sample_advisory_board() -> Value {
    json!([
        {
            "name": "Prof. K. Ratnayake",
            "designation": "Professor",
            "department": "Computer Science",
        }
    ])
}

pub fn sample_named_members() -> Value {
    json!([
        { "reg_no": "S/19/101", "name": "G. Herath" },
        { "reg_no": "S/19/102", "name": "H. Dissanayake" },
    ])
}

pub fn sample_planned_events() -> Value {
    json!([
        { "month": "March", "activity": "Orientation session" },
        { "month": "July", "activity": "Annual hackathon" },
    ])
}

pub fn sample_previous_activities() -> Value {
    json!([
        { "month": "February", "activity": "Workshop series" },
    ])
}
