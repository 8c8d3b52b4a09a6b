use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        society::{PaginatedSocietiesDto, SocietyDto, SocietyStatisticsDto},
    },
    server::{error::AppError, service::society::SocietyService, state::AppState},
};

/// Tag for grouping society endpoints in OpenAPI documentation
pub static SOCIETY_TAG: &str = "society";

fn default_per_page() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct SocietyQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub year: Option<i32>,
}

/// Public society directory, paginated.
///
/// Supports a name search plus status and registration-year filters. No
/// authentication required.
#[utoipa::path(
    get,
    path = "/api/societies/public",
    tag = SOCIETY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("search" = Option<String>, Query, description = "Substring match on society name"),
        ("status" = Option<String>, Query, description = "ACTIVE or INACTIVE"),
        ("year" = Option<i32>, Query, description = "Registration year filter")
    ),
    responses(
        (status = 200, description = "Paginated society list", body = PaginatedSocietiesDto),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_societies(
    State(state): State<AppState>,
    Query(query): Query<SocietyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let societies = SocietyService::new(&state.db)
        .get_paginated(
            query.search,
            query.status,
            query.year,
            query.page,
            query.per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(societies)))
}

/// A single society by id.
#[utoipa::path(
    get,
    path = "/api/societies/public/{id}",
    tag = SOCIETY_TAG,
    params(
        ("id" = i32, Path, description = "Society ID")
    ),
    responses(
        (status = 200, description = "The society", body = SocietyDto),
        (status = 404, description = "Society not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_society(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let society = SocietyService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Society not found".to_string()))?;

    Ok((StatusCode::OK, Json(society)))
}

/// All active societies, for dropdowns on the submission forms.
#[utoipa::path(
    get,
    path = "/api/societies/active",
    tag = SOCIETY_TAG,
    responses(
        (status = 200, description = "Active societies ordered by name", body = Vec<SocietyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_societies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let societies = SocietyService::new(&state.db).get_active().await?;

    Ok((StatusCode::OK, Json(societies)))
}

/// Society counts for the public landing page.
#[utoipa::path(
    get,
    path = "/api/societies/statistics",
    tag = SOCIETY_TAG,
    responses(
        (status = 200, description = "Aggregate society counts", body = SocietyStatisticsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let statistics = SocietyService::new(&state.db).statistics().await?;

    Ok((StatusCode::OK, Json(statistics)))
}
