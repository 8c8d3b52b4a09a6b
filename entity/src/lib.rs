pub mod prelude;

pub mod activity_log;
pub mod admin_user;
pub mod event_permission;
pub mod sea_orm_active_enums;
pub mod society;
pub mod society_registration;
pub mod society_renewal;
