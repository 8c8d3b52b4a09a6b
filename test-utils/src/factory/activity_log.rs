use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an activity log entry with the given fields.
pub async fn create_activity_log(
    db: &DatabaseConnection,
    action: impl Into<String>,
    details: impl Into<String>,
    actor: impl Into<String>,
) -> Result<entity::activity_log::Model, DbErr> {
    entity::activity_log::ActiveModel {
        action: ActiveValue::Set(action.into()),
        details: ActiveValue::Set(details.into()),
        actor: ActiveValue::Set(actor.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
