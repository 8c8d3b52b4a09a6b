use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocietyDto {
    pub id: i32,
    pub name: String,
    pub aims: String,
    pub faculty: Option<String>,
    /// `ACTIVE` or `INACTIVE`.
    pub status: String,
    pub registered_year: i32,
    pub last_renewed_year: Option<i32>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SocietyDto {
    pub fn from_entity(entity: entity::society::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            aims: entity.aims,
            faculty: entity.faculty,
            status: entity.status.to_value(),
            registered_year: entity.registered_year,
            last_renewed_year: entity.last_renewed_year,
            website: entity.website,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSocietiesDto {
    pub societies: Vec<SocietyDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Aggregate counts shown on the public landing page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocietyStatisticsDto {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}
