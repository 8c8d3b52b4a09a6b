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
        registration::ReviewDto,
        renewal::{CreateRenewalDto, PaginatedRenewalsDto, RenewalDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::registration::GetPaginatedRegistrationsParam,
        service::renewal::RenewalService,
        state::AppState,
    },
};

/// Tag for grouping renewal endpoints in OpenAPI documentation
pub static RENEWAL_TAG: &str = "renewal";

fn default_per_page() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct RenewalListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub year: Option<i32>,
    pub stage: Option<String>,
}

#[derive(Deserialize)]
pub struct LatestDataQuery {
    pub society_name: String,
}

/// Submit a society renewal application.
///
/// Public endpoint; the society must already be registered. The application
/// enters the approval workflow at the dean stage.
#[utoipa::path(
    post,
    path = "/api/societies/renew",
    tag = RENEWAL_TAG,
    request_body = CreateRenewalDto,
    responses(
        (status = 201, description = "Application stored at the dean stage", body = RenewalDto),
        (status = 400, description = "Unknown society", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_renewal(
    State(state): State<AppState>,
    Json(payload): Json<CreateRenewalDto>,
) -> Result<impl IntoResponse, AppError> {
    let renewal = RenewalService::new(&state.db).submit(payload).await?;

    Ok((StatusCode::CREATED, Json(renewal)))
}

/// A single renewal application by id.
#[utoipa::path(
    get,
    path = "/api/renewals/{id}",
    tag = RENEWAL_TAG,
    params(
        ("id" = i32, Path, description = "Renewal ID")
    ),
    responses(
        (status = 200, description = "The application", body = RenewalDto),
        (status = 404, description = "Renewal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_renewal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let renewal = RenewalService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Renewal not found".to_string()))?;

    Ok((StatusCode::OK, Json(renewal)))
}

/// The society's most recent approved renewal, for prefilling a new one.
#[utoipa::path(
    get,
    path = "/api/renewals/latest-data",
    tag = RENEWAL_TAG,
    params(
        ("society_name" = String, Query, description = "Society name")
    ),
    responses(
        (status = 200, description = "Most recent approved renewal", body = RenewalDto),
        (status = 404, description = "No approved renewal for this society", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_data(
    State(state): State<AppState>,
    Query(query): Query<LatestDataQuery>,
) -> Result<impl IntoResponse, AppError> {
    let renewal = RenewalService::new(&state.db)
        .latest_approved(&query.society_name)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("No approved renewal found for this society".to_string())
        })?;

    Ok((StatusCode::OK, Json(renewal)))
}

/// Paginated renewals for admin listings.
#[utoipa::path(
    get,
    path = "/api/admin/renewals",
    tag = RENEWAL_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("year" = Option<i32>, Query, description = "Filter by renewal year"),
        ("stage" = Option<String>, Query, description = "Filter by stage, e.g. PENDING_VC")
    ),
    responses(
        (status = 200, description = "Paginated renewals", body = PaginatedRenewalsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_renewals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RenewalListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param =
        GetPaginatedRegistrationsParam::new(query.page, query.per_page, query.year, query.stage)?;
    let renewals = RenewalService::new(&state.db).get_paginated(param).await?;

    Ok((StatusCode::OK, Json(renewals)))
}

/// Approve the renewal at the signed-in admin's stage.
#[utoipa::path(
    post,
    path = "/api/admin/renewals/{id}/approve",
    tag = RENEWAL_TAG,
    params(
        ("id" = i32, Path, description = "Renewal ID")
    ),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request advanced (or approved)", body = RenewalDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role or faculty mismatch", body = ErrorDto),
        (status = 404, description = "Renewal not found", body = ErrorDto),
        (status = 409, description = "Request already decided or at another stage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_renewal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let renewal = RenewalService::new(&state.db)
        .approve(id, &admin, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(renewal)))
}

/// Reject the renewal at the signed-in admin's stage; a comment is required.
#[utoipa::path(
    post,
    path = "/api/admin/renewals/{id}/reject",
    tag = RENEWAL_TAG,
    params(
        ("id" = i32, Path, description = "Renewal ID")
    ),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Request rejected", body = RenewalDto),
        (status = 400, description = "Missing rejection comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Role or faculty mismatch", body = ErrorDto),
        (status = 404, description = "Renewal not found", body = ErrorDto),
        (status = 409, description = "Request already decided or at another stage", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_renewal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let renewal = RenewalService::new(&state.db)
        .reject(id, &admin, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(renewal)))
}
