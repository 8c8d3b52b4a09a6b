use super::*;

/// Tests appending an audit entry.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn stores_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = ActivityLogRepository::new(db)
        .log("Society Registration Approved", "Chess Club (application #1)", "Prof. N. Perera")
        .await?;

    assert_eq!(entry.action, "Society Registration Approved");
    assert_eq!(entry.actor, "Prof. N. Perera");

    Ok(())
}
