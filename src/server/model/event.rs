//! Event permission parameter types.

use entity::sea_orm_active_enums::EventStage;
use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parameters for paginated event-permission queries with an optional stage
/// filter.
#[derive(Debug, Clone)]
pub struct GetPaginatedEventsParam {
    pub page: u64,
    pub per_page: u64,
    pub stage: Option<EventStage>,
}

impl GetPaginatedEventsParam {
    pub fn new(page: u64, per_page: u64, stage: Option<String>) -> Result<Self, AppError> {
        let stage = stage
            .map(|s| {
                EventStage::try_from_value(&s)
                    .map_err(|_| AppError::BadRequest(format!("Unknown stage '{}'", s)))
            })
            .transpose()?;

        Ok(Self {
            page,
            per_page,
            stage,
        })
    }
}
