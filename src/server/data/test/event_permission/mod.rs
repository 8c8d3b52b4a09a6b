use crate::server::data::event_permission::EventPermissionRepository;
use entity::sea_orm_active_enums::EventStage;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_review;
mod find_by_stage;
mod upcoming_approved;
