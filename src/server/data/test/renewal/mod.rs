use crate::server::data::renewal::RenewalRepository;
use entity::sea_orm_active_enums::ApprovalStage;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_review;
mod find_latest_approved;
