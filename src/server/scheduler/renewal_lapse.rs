use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::society::SocietyService};

/// Month from which unrenewed societies are considered lapsed.
///
/// Societies have until the end of February to file a renewal for the new
/// year; from March onwards the daily sweep deactivates stragglers.
const LAPSE_GRACE_END_MONTH: u32 = 3;

/// Starts the renewal-lapse scheduler.
///
/// The job runs once a day and deactivates active societies whose last
/// approved renewal (or registration) does not cover the current year, once
/// the grace period has passed.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Daily at 02:10 UTC
    let job = Job::new_async("0 10 2 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = process_renewal_lapses(&db).await {
                tracing::error!("Error processing renewal lapses: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Renewal lapse scheduler started");

    Ok(())
}

/// Deactivates societies whose renewal has lapsed for the current year.
async fn process_renewal_lapses(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Utc::now();

    if now.month() < LAPSE_GRACE_END_MONTH {
        return Ok(());
    }

    let count = SocietyService::new(db).deactivate_lapsed(now.year()).await?;

    if count > 0 {
        tracing::info!("Deactivated {} societies with lapsed renewals", count);
    }

    Ok(())
}
