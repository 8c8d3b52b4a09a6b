//! Activity log data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::activity_log::GetActivityLogsParam;

pub struct ActivityLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the activity log.
    pub async fn log(
        &self,
        action: impl Into<String>,
        details: impl Into<String>,
        actor: impl Into<String>,
    ) -> Result<entity::activity_log::Model, DbErr> {
        entity::activity_log::ActiveModel {
            action: ActiveValue::Set(action.into()),
            details: ActiveValue::Set(details.into()),
            actor: ActiveValue::Set(actor.into()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets paginated log entries, newest first.
    ///
    /// Optional actor and action filters are substring matches (SQLite LIKE,
    /// case-insensitive for ASCII).
    ///
    /// # Returns
    /// - `Ok((logs, total))` - Page of entries and total matching rows
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        param: &GetActivityLogsParam,
    ) -> Result<(Vec<entity::activity_log::Model>, u64), DbErr> {
        let mut query = entity::prelude::ActivityLog::find();

        if let Some(actor) = &param.actor {
            query = query.filter(entity::activity_log::Column::Actor.contains(actor));
        }
        if let Some(action) = &param.action {
            query = query.filter(entity::activity_log::Column::Action.contains(action));
        }

        let paginator = query
            .order_by_desc(entity::activity_log::Column::CreatedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let logs = paginator.fetch_page(param.page).await?;

        Ok((logs, total))
    }
}
