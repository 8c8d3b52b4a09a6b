use crate::server::data::society::SocietyRepository;
use entity::sea_orm_active_enums::SocietyStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active_not_renewed_since;
mod get_paginated;
mod mark_renewed;
mod upsert_active;
