use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SocietyStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "society")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub aims: String,
    pub faculty: Option<String>,
    pub status: SocietyStatus,
    /// Year the society was first registered.
    pub registered_year: i32,
    /// Most recent year an approved registration or renewal covered.
    pub last_renewed_year: Option<i32>,
    pub website: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
