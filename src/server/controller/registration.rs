use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        registration::{
            CreateRegistrationDto, PaginatedRegistrationsDto, RegistrationDto, ReviewDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::registration::GetPaginatedRegistrationsParam,
        service::registration::RegistrationService,
        state::AppState,
    },
};

/// Tag for grouping registration endpoints in OpenAPI documentation
pub static REGISTRATION_TAG: &str = "registration";

fn default_per_page() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct RegistrationListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub year: Option<i32>,
    pub stage: Option<String>,
}

/// Submit a society registration application.
///
/// Public endpoint; the application enters the approval workflow at the dean
/// stage. An active society with the same name blocks the submission.
#[utoipa::path(
    post,
    path = "/api/societies/register",
    tag = REGISTRATION_TAG,
    request_body = CreateRegistrationDto,
    responses(
        (status = 201, description = "Application stored at the dean stage", body = RegistrationDto),
        (status = 409, description = "An active society with this name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    Json(payload): Json<CreateRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let registration = RegistrationService::new(&state.db).submit(payload).await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// A single registration application by id.
#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "The application", body = RegistrationDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registration = RegistrationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

    Ok((StatusCode::OK, Json(registration)))
}

/// Paginated registrations for admin listings.
///
/// # Access Control
/// - Any signed-in admin
#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    tag = REGISTRATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("year" = Option<i32>, Query, description = "Filter by registration year"),
        ("stage" = Option<String>, Query, description = "Filter by stage, e.g. PENDING_AR")
    ),
    responses(
        (status = 200, description = "Paginated registrations", body = PaginatedRegistrationsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_registrations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RegistrationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param =
        GetPaginatedRegistrationsParam::new(query.page, query.per_page, query.year, query.stage)?;
    let registrations = RegistrationService::new(&state.db).get_paginated(param).await?;

    Ok((StatusCode::OK, Json(registrations)))
}

/// Approve the registration at the signed-in admin's stage.
///
/// # Access Control
/// - Dean / Assistant Registrar / Vice Chancellor, matched against the
///   request's current stage; deans only within their own faculty
#[utoipa::path(
    post,
    path = "/api/admin/registrations/{id}/approve",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request advanced (or approved)", body = RegistrationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role or faculty mismatch", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 409, description = "Request already decided or at another stage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_registration(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registration = RegistrationService::new(&state.db)
        .approve(id, &admin, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(registration)))
}

/// Reject the registration at the signed-in admin's stage.
///
/// A non-empty comment is required.
#[utoipa::path(
    post,
    path = "/api/admin/registrations/{id}/reject",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request rejected", body = RegistrationDto),
        (status = 400, description = "Missing rejection comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role or faculty mismatch", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 409, description = "Request already decided or at another stage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_registration(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registration = RegistrationService::new(&state.db)
        .reject(id, &admin, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(registration)))
}
