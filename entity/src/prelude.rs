pub use super::activity_log::Entity as ActivityLog;
pub use super::admin_user::Entity as AdminUser;
pub use super::event_permission::Entity as EventPermission;
pub use super::society::Entity as Society;
pub use super::society_registration::Entity as SocietyRegistration;
pub use super::society_renewal::Entity as SocietyRenewal;
