//! Society directory service.
//!
//! Read-side queries over the society table for the public directory, plus the
//! lapse sweep used by the renewal-lapse scheduler. Societies are created and
//! renewed through the registration and renewal workflows, not here.

use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::sea_orm_active_enums::SocietyStatus;

use crate::{
    model::society::{PaginatedSocietiesDto, SocietyDto, SocietyStatisticsDto},
    server::{
        data::{activity_log::ActivityLogRepository, society::SocietyRepository},
        error::AppError,
        service::registration::total_pages,
    },
};

pub struct SocietyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocietyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SocietyDto>, AppError> {
        let society = SocietyRepository::new(self.db).get_by_id(id).await?;

        Ok(society.map(SocietyDto::from_entity))
    }

    /// Gets paginated societies with optional name search and filters.
    ///
    /// # Arguments
    /// - `search` - Optional substring match on the society name
    /// - `status` - Optional status filter string (`ACTIVE`/`INACTIVE`)
    /// - `year` - Optional registration year filter
    /// - `page` / `per_page` - Pagination
    pub async fn get_paginated(
        &self,
        search: Option<String>,
        status: Option<String>,
        year: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedSocietiesDto, AppError> {
        let status = status
            .map(|s| {
                SocietyStatus::try_from_value(&s)
                    .map_err(|_| AppError::BadRequest(format!("Unknown status '{}'", s)))
            })
            .transpose()?;

        let (societies, total) = SocietyRepository::new(self.db)
            .get_paginated(search.as_deref(), status, year, page, per_page)
            .await?;

        Ok(PaginatedSocietiesDto {
            societies: societies.into_iter().map(SocietyDto::from_entity).collect(),
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets all active societies for dropdowns and the public directory.
    pub async fn get_active(&self) -> Result<Vec<SocietyDto>, AppError> {
        let societies = SocietyRepository::new(self.db).get_active().await?;

        Ok(societies.into_iter().map(SocietyDto::from_entity).collect())
    }

    pub async fn statistics(&self) -> Result<SocietyStatisticsDto, AppError> {
        let repo = SocietyRepository::new(self.db);

        let total = repo.count_all().await?;
        let active = repo.count_by_status(SocietyStatus::Active).await?;
        let inactive = repo.count_by_status(SocietyStatus::Inactive).await?;

        Ok(SocietyStatisticsDto {
            total,
            active,
            inactive,
        })
    }

    /// Deactivates active societies that have not renewed for `current_year`.
    ///
    /// Called by the renewal-lapse scheduler once the grace period into the
    /// new year has passed. Each lapse is recorded in the activity log.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of societies deactivated
    pub async fn deactivate_lapsed(&self, current_year: i32) -> Result<u64, AppError> {
        let repo = SocietyRepository::new(self.db);
        let log_repo = ActivityLogRepository::new(self.db);

        let lapsed = repo.get_active_not_renewed_since(current_year).await?;
        let count = lapsed.len() as u64;

        for society in lapsed {
            repo.set_status(society.id, SocietyStatus::Inactive).await?;
            log_repo
                .log(
                    "Society Lapsed",
                    format!(
                        "{} deactivated; last renewed {}",
                        society.name,
                        society
                            .last_renewed_year
                            .map(|y| y.to_string())
                            .unwrap_or_else(|| "never".to_string())
                    ),
                    "system",
                )
                .await?;
        }

        Ok(count)
    }
}
