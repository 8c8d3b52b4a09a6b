use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateEmailDto {
    pub email: String,
    /// Position the address belongs to; student positions must use the
    /// university domain.
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateMobileDto {
    pub mobile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateRegNoDto {
    pub reg_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateBulkEmailsDto {
    pub emails: Vec<String>,
}

/// Result of a single-field validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationResultDto {
    pub valid: bool,
    pub message: Option<String>,
}

/// Result of a bulk email validation: the inputs partitioned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkEmailValidationDto {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}
