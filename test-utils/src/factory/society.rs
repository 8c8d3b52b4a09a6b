use crate::factory::helpers::next_id;
use chrono::{Datelike, Utc};
use entity::sea_orm_active_enums::SocietyStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test societies.
pub struct SocietyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    aims: String,
    faculty: Option<String>,
    status: SocietyStatus,
    registered_year: i32,
    last_renewed_year: Option<i32>,
    website: Option<String>,
}

impl<'a> SocietyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let year = Utc::now().year();
        Self {
            db,
            name: format!("Society {}", id),
            aims: "Promote student activities".to_string(),
            faculty: Some("Science".to_string()),
            status: SocietyStatus::Active,
            registered_year: year,
            last_renewed_year: Some(year),
            website: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = Some(faculty.into());
        self
    }

    pub fn status(mut self, status: SocietyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn registered_year(mut self, year: i32) -> Self {
        self.registered_year = year;
        self
    }

    pub fn last_renewed_year(mut self, year: Option<i32>) -> Self {
        self.last_renewed_year = year;
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub async fn build(self) -> Result<entity::society::Model, DbErr> {
        entity::society::ActiveModel {
            name: ActiveValue::Set(self.name),
            aims: ActiveValue::Set(self.aims),
            faculty: ActiveValue::Set(self.faculty),
            status: ActiveValue::Set(self.status),
            registered_year: ActiveValue::Set(self.registered_year),
            last_renewed_year: ActiveValue::Set(self.last_renewed_year),
            website: ActiveValue::Set(self.website),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active society with default values.
pub async fn create_society(db: &DatabaseConnection) -> Result<entity::society::Model, DbErr> {
    SocietyFactory::new(db).build().await
}
