use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        validation::{
            BulkEmailValidationDto, ValidateBulkEmailsDto, ValidateEmailDto, ValidateMobileDto,
            ValidateRegNoDto, ValidationResultDto,
        },
    },
    server::{error::AppError, service::validation::ValidationService, state::AppState},
};

/// Tag for grouping validation endpoints in OpenAPI documentation
pub static VALIDATION_TAG: &str = "validation";

/// Validate an email address.
///
/// When a position is given, student positions must use the university
/// domain.
#[utoipa::path(
    post,
    path = "/api/validation/email",
    tag = VALIDATION_TAG,
    request_body = ValidateEmailDto,
    responses(
        (status = 200, description = "Validation result", body = ValidationResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_email(
    State(state): State<AppState>,
    Json(payload): Json<ValidateEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ValidationService::new(state.university_email_domain.clone());
    let result = service.validate_email(&payload.email, payload.position.as_deref());

    Ok((StatusCode::OK, Json(result)))
}

/// Validate a Sri Lankan mobile number.
#[utoipa::path(
    post,
    path = "/api/validation/mobile",
    tag = VALIDATION_TAG,
    request_body = ValidateMobileDto,
    responses(
        (status = 200, description = "Validation result", body = ValidationResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_mobile(
    State(state): State<AppState>,
    Json(payload): Json<ValidateMobileDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ValidationService::new(state.university_email_domain.clone());
    let result = service.validate_mobile(&payload.mobile);

    Ok((StatusCode::OK, Json(result)))
}

/// Validate a student registration number.
#[utoipa::path(
    post,
    path = "/api/validation/registration-number",
    tag = VALIDATION_TAG,
    request_body = ValidateRegNoDto,
    responses(
        (status = 200, description = "Validation result", body = ValidationResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_registration_number(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRegNoDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ValidationService::new(state.university_email_domain.clone());
    let result = service.validate_reg_no(&payload.reg_no);

    Ok((StatusCode::OK, Json(result)))
}

/// Partition a list of email addresses into valid and invalid.
#[utoipa::path(
    post,
    path = "/api/validation/bulk-emails",
    tag = VALIDATION_TAG,
    request_body = ValidateBulkEmailsDto,
    responses(
        (status = 200, description = "Partitioned addresses", body = BulkEmailValidationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_bulk_emails(
    State(state): State<AppState>,
    Json(payload): Json<ValidateBulkEmailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ValidationService::new(state.university_email_domain.clone());
    let result = service.validate_bulk(&payload.emails);

    Ok((StatusCode::OK, Json(result)))
}
