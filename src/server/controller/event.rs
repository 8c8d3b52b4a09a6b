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
        event::{
            CreateEventPermissionDto, EventPermissionDto, PaginatedEventsDto, UpcomingEventDto,
            ValidateApplicantDto, ValidateApplicantResultDto,
        },
        registration::ReviewDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::event::GetPaginatedEventsParam,
        service::event::EventPermissionService,
        state::AppState,
    },
};

/// Tag for grouping event-permission endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

fn default_per_page() -> u64 {
    10
}

fn default_upcoming_limit() -> u64 {
    5
}

#[derive(Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub stage: Option<String>,
}

#[derive(Deserialize)]
pub struct UpcomingQuery {
    #[serde(default = "default_upcoming_limit")]
    pub limit: u64,
}

/// Request permission to hold an event.
///
/// Public endpoint. The requesting society must be active and the event date
/// must not be in the past. Inside-university events will pass through the
/// premises officer; outside events skip that stage.
#[utoipa::path(
    post,
    path = "/api/events/request",
    tag = EVENT_TAG,
    request_body = CreateEventPermissionDto,
    responses(
        (status = 201, description = "Request stored at the dean stage", body = EventPermissionDto),
        (status = 400, description = "Unknown/inactive society or past event date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_permission(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventPermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventPermissionService::new(&state.db).submit(payload).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// A single event-permission request by id.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event permission ID")
    ),
    responses(
        (status = 200, description = "The request", body = EventPermissionDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventPermissionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event permission request not found".to_string()))?;

    Ok((StatusCode::OK, Json(event)))
}

/// Upcoming approved events for the public landing page.
#[utoipa::path(
    get,
    path = "/api/events/public/upcoming",
    tag = EVENT_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum events to return (default: 5)")
    ),
    responses(
        (status = 200, description = "Approved events from today onwards", body = Vec<UpcomingEventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventPermissionService::new(&state.db).upcoming(query.limit).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Check that an applicant holds the society position they claim.
///
/// Matched against the office bearers of the society's most recent approved
/// application.
#[utoipa::path(
    post,
    path = "/api/events/validate-applicant",
    tag = EVENT_TAG,
    request_body = ValidateApplicantDto,
    responses(
        (status = 200, description = "Whether the applicant matches", body = ValidateApplicantResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_applicant(
    State(state): State<AppState>,
    Json(payload): Json<ValidateApplicantDto>,
) -> Result<impl IntoResponse, AppError> {
    let valid = EventPermissionService::new(&state.db)
        .validate_applicant(&payload)
        .await?;

    Ok((StatusCode::OK, Json(ValidateApplicantResultDto { valid })))
}

/// Paginated event requests for admin listings.
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("stage" = Option<String>, Query, description = "Filter by stage, e.g. PENDING_PREMISES")
    ),
    responses(
        (status = 200, description = "Paginated event requests", body = PaginatedEventsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = GetPaginatedEventsParam::new(query.page, query.per_page, query.stage)?;
    let events = EventPermissionService::new(&state.db).get_paginated(param).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Approve the event request at the signed-in admin's stage.
#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/approve",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event permission ID")
    ),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request advanced (or approved)", body = EventPermissionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role or faculty mismatch", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already decided or at another stage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventPermissionService::new(&state.db)
        .approve(id, &admin, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Reject the event request at the signed-in admin's stage; a comment is
/// required.
#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/reject",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event permission ID")
    ),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request rejected", body = EventPermissionDto),
        (status = 400, description = "Missing rejection comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role or faculty mismatch", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already decided or at another stage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventPermissionService::new(&state.db)
        .reject(id, &admin, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}
