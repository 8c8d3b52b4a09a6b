//! Entity factories for tests.
//!
//! Each factory inserts an entity with sensible defaults that individual tests
//! can override through a builder-style interface.

pub mod activity_log;
pub mod admin_user;
pub mod event_permission;
pub mod helpers;
pub mod registration;
pub mod renewal;
pub mod society;

pub use activity_log::create_activity_log;
pub use admin_user::{create_admin_user, create_admin_with_role, AdminUserFactory};
pub use event_permission::{create_event_permission, EventPermissionFactory};
pub use registration::{create_registration, RegistrationFactory};
pub use renewal::{create_renewal, RenewalFactory};
pub use society::{create_society, SocietyFactory};
