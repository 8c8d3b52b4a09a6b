mod activity_log;
mod admin_user;
mod event_permission;
mod registration;
mod renewal;
mod society;
