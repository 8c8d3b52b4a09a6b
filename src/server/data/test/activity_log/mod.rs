use crate::server::{
    data::activity_log::ActivityLogRepository, model::activity_log::GetActivityLogsParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod log;
