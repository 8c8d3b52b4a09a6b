//! Society data repository for database operations.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::sea_orm_active_enums::SocietyStatus;

pub struct SocietyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocietyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or reactivates a society after a registration is fully approved.
    ///
    /// Inserts a new active society, or, when a society with the same name
    /// already exists (an inactive one re-registering), updates its details
    /// and reactivates it. The original `registered_year` is preserved on
    /// conflict.
    ///
    /// # Arguments
    /// - `name` - Society name (unique)
    /// - `aims` - Society aims from the approved application
    /// - `faculty` - Applicant faculty recorded against the society
    /// - `website` - Optional website
    /// - `year` - Year covered by the approved application
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or reactivated society
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_active(
        &self,
        name: String,
        aims: String,
        faculty: Option<String>,
        website: Option<String>,
        year: i32,
    ) -> Result<entity::society::Model, DbErr> {
        let entity = entity::prelude::Society::insert(entity::society::ActiveModel {
            name: ActiveValue::Set(name),
            aims: ActiveValue::Set(aims),
            faculty: ActiveValue::Set(faculty),
            status: ActiveValue::Set(SocietyStatus::Active),
            registered_year: ActiveValue::Set(year),
            last_renewed_year: ActiveValue::Set(Some(year)),
            website: ActiveValue::Set(website),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::society::Column::Name)
                .update_columns([
                    entity::society::Column::Aims,
                    entity::society::Column::Faculty,
                    entity::society::Column::Status,
                    entity::society::Column::LastRenewedYear,
                    entity::society::Column::Website,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::society::Model>, DbErr> {
        entity::prelude::Society::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::society::Model>, DbErr> {
        entity::prelude::Society::find()
            .filter(entity::society::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets paginated societies with optional name search and filters.
    ///
    /// # Arguments
    /// - `search` - Optional substring match on the society name
    /// - `status` - Optional status filter
    /// - `year` - Optional filter on the registration year
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of societies per page
    ///
    /// # Returns
    /// - `Ok((societies, total))` - Page of societies ordered by name, and the
    ///   total number of matching rows
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        status: Option<SocietyStatus>,
        year: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::society::Model>, u64), DbErr> {
        let mut query = entity::prelude::Society::find();

        if let Some(search) = search {
            query = query.filter(entity::society::Column::Name.contains(search));
        }
        if let Some(status) = status {
            query = query.filter(entity::society::Column::Status.eq(status));
        }
        if let Some(year) = year {
            query = query.filter(entity::society::Column::RegisteredYear.eq(year));
        }

        let paginator = query
            .order_by_asc(entity::society::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let societies = paginator.fetch_page(page).await?;

        Ok((societies, total))
    }

    /// Gets all active societies, ordered alphabetically by name.
    pub async fn get_active(&self) -> Result<Vec<entity::society::Model>, DbErr> {
        entity::prelude::Society::find()
            .filter(entity::society::Column::Status.eq(SocietyStatus::Active))
            .order_by_asc(entity::society::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Society::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: SocietyStatus) -> Result<u64, DbErr> {
        entity::prelude::Society::find()
            .filter(entity::society::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Stamps an approved renewal year onto the society and reactivates it.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated society
    /// - `Err(DbErr::RecordNotFound)` - No society with that name
    pub async fn mark_renewed(
        &self,
        name: &str,
        year: i32,
    ) -> Result<entity::society::Model, DbErr> {
        let society = self
            .find_by_name(name)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Society '{}' not found",
                name
            )))?;

        let mut active_model: entity::society::ActiveModel = society.into();
        active_model.last_renewed_year = ActiveValue::Set(Some(year));
        active_model.status = ActiveValue::Set(SocietyStatus::Active);

        active_model.update(self.db).await
    }

    /// Sets the lifecycle status of a society.
    pub async fn set_status(
        &self,
        id: i32,
        status: SocietyStatus,
    ) -> Result<entity::society::Model, DbErr> {
        let society = entity::prelude::Society::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Society {} not found", id)))?;

        let mut active_model: entity::society::ActiveModel = society.into();
        active_model.status = ActiveValue::Set(status);

        active_model.update(self.db).await
    }

    /// Gets active societies whose last renewed year is before the given year.
    ///
    /// Used by the renewal-lapse job to find societies that missed renewal.
    pub async fn get_active_not_renewed_since(
        &self,
        year: i32,
    ) -> Result<Vec<entity::society::Model>, DbErr> {
        entity::prelude::Society::find()
            .filter(entity::society::Column::Status.eq(SocietyStatus::Active))
            .filter(
                Condition::any()
                    .add(entity::society::Column::LastRenewedYear.lt(year))
                    .add(entity::society::Column::LastRenewedYear.is_null()),
            )
            .order_by_asc(entity::society::Column::Name)
            .all(self.db)
            .await
    }
}
