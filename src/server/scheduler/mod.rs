//! Cron jobs for automated housekeeping.

pub mod renewal_lapse;
