pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_admin_user_table;
mod m20260110_000002_create_society_table;
mod m20260110_000003_create_society_registration_table;
mod m20260110_000004_create_society_renewal_table;
mod m20260111_000005_create_event_permission_table;
mod m20260111_000006_create_activity_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_admin_user_table::Migration),
            Box::new(m20260110_000002_create_society_table::Migration),
            Box::new(m20260110_000003_create_society_registration_table::Migration),
            Box::new(m20260110_000004_create_society_renewal_table::Migration),
            Box::new(m20260111_000005_create_event_permission_table::Migration),
            Box::new(m20260111_000006_create_activity_log_table::Migration),
        ]
    }
}
