use crate::server::data::registration::RegistrationRepository;
use entity::sea_orm_active_enums::ApprovalStage;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_review;
mod create;
mod find_by_stage;
mod find_latest_approved;
mod get_paginated;
