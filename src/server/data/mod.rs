//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! them to the service layer, which converts to DTOs at the API boundary. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod activity_log;
pub mod admin_user;
pub mod event_permission;
pub mod registration;
pub mod renewal;
pub mod society;

#[cfg(test)]
mod test;
