//! Stateless field validators for the public submission forms.
//!
//! Mirrors the checks the frontend performs so that submissions are validated
//! server-side as well: email shape (with a university-domain requirement for
//! student positions), Sri Lankan mobile numbers, and student registration
//! numbers of the `S/18/001` shape.

use crate::model::validation::{BulkEmailValidationDto, ValidationResultDto};

/// Positions that must use a university email address.
///
/// The senior treasurer is academic staff and may use any address; every
/// student position must be reachable under the university domain.
const STUDENT_POSITIONS: &[&str] = &[
    "president",
    "vice_president",
    "secretary",
    "joint_secretary",
    "junior_treasurer",
    "editor",
];

pub struct ValidationService {
    university_domain: String,
}

impl ValidationService {
    pub fn new(university_domain: impl Into<String>) -> Self {
        Self {
            university_domain: university_domain.into(),
        }
    }

    /// Validates an email address, applying the university-domain rule when
    /// the address belongs to a student position.
    pub fn validate_email(&self, email: &str, position: Option<&str>) -> ValidationResultDto {
        if !Self::is_well_formed_email(email) {
            return ValidationResultDto {
                valid: false,
                message: Some("Invalid email address".to_string()),
            };
        }

        if let Some(position) = position {
            let normalized = position.trim().to_lowercase().replace(' ', "_");
            if STUDENT_POSITIONS.contains(&normalized.as_str())
                && !self.is_university_address(email)
            {
                return ValidationResultDto {
                    valid: false,
                    message: Some(format!(
                        "Student positions must use a {} address",
                        self.university_domain
                    )),
                };
            }
        }

        ValidationResultDto {
            valid: true,
            message: None,
        }
    }

    /// Validates a Sri Lankan mobile number.
    ///
    /// Accepts the local `0XXXXXXXXX` form (ten digits) and the international
    /// `+94XXXXXXXXX` form (nine digits after the prefix).
    pub fn validate_mobile(&self, mobile: &str) -> ValidationResultDto {
        let mobile = mobile.trim();

        let valid = if let Some(rest) = mobile.strip_prefix("+94") {
            rest.len() == 9 && rest.chars().all(|c| c.is_ascii_digit())
        } else {
            mobile.len() == 10
                && mobile.starts_with('0')
                && mobile.chars().all(|c| c.is_ascii_digit())
        };

        ValidationResultDto {
            valid,
            message: (!valid).then(|| "Invalid mobile number".to_string()),
        }
    }

    /// Validates a student registration number.
    ///
    /// Expected shape is slash-separated alphanumeric segments with at least
    /// one slash, e.g. `S/18/001` or `E/2020/1234`.
    pub fn validate_reg_no(&self, reg_no: &str) -> ValidationResultDto {
        let reg_no = reg_no.trim();

        let segments: Vec<&str> = reg_no.split('/').collect();
        let valid = segments.len() >= 2
            && segments
                .iter()
                .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()));

        ValidationResultDto {
            valid,
            message: (!valid).then(|| "Invalid registration number".to_string()),
        }
    }

    /// Partitions a list of email addresses into well-formed and malformed.
    pub fn validate_bulk(&self, emails: &[String]) -> BulkEmailValidationDto {
        let (valid, invalid) = emails
            .iter()
            .cloned()
            .partition(|email| Self::is_well_formed_email(email));

        BulkEmailValidationDto { valid, invalid }
    }

    /// Basic structural email check: one `@`, non-empty local part, and a
    /// dotted domain without whitespace.
    fn is_well_formed_email(email: &str) -> bool {
        let email = email.trim();
        if email.contains(char::is_whitespace) {
            return false;
        }

        let mut parts = email.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };

        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }

    /// True when the address is under the configured university domain,
    /// including subdomains such as `students.pdn.ac.lk`.
    fn is_university_address(&self, email: &str) -> bool {
        let Some((_, domain)) = email.rsplit_once('@') else {
            return false;
        };

        domain == self.university_domain
            || domain.ends_with(&format!(".{}", self.university_domain))
    }
}
